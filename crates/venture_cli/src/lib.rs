//! # venture_cli: Command-Line Front End (Service Layer)
//!
//! The wrapping application around the venture core crates. It owns
//! everything the core deliberately does not:
//!
//! - Configuration from TOML files, environment variables and flags
//!   ([`config`])
//! - Scenario files ([`scenario_file`])
//! - Report rendering as table, JSON or CSV ([`output`])
//! - The `simulate`, `compare` and `sensitivity` commands ([`commands`])
//!
//! The core is invoked only through its public operations; the JSON
//! [`SimulationRecord`](output::SimulationRecord) is the hand-off point for
//! any persistence layer.

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod scenario_file;

pub use error::{CliError, Result};

/// Crate version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
