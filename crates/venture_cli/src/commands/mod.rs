//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to any `io::Write`, so they run the same against stdout, a file
//! or an in-memory buffer.

pub mod compare;
pub mod sensitivity;
pub mod simulate;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::{CliError, Result};

/// Renders a report and writes it to `path`, or stdout when `None`.
///
/// The report is rendered in memory first. If `render` fails, nothing is
/// written and an existing file at `path` is left as it was.
pub fn emit<F>(path: Option<&Path>, render: F) -> Result<()>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut report = Vec::new();
    render(&mut report)?;

    match path {
        Some(path) => fs::write(path, &report).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&report)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
