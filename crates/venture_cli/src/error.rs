//! CLI error types.

use thiserror::Error;
use venture_core::types::{DomainError, UnknownParameter, ValidationError};
use venture_risk::scenarios::SensitivityError;

use crate::config::ConfigError;

/// Errors surfaced by the `venture` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A scenario file could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// File involved
        path: String,
        /// Parser message
        message: String,
    },

    /// A command-line argument is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be assembled.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Engine configuration was rejected.
    #[error(transparent)]
    Engine(#[from] venture_engine::mc::ConfigError),

    /// A scenario failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Statistics were requested over a degenerate result.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A sensitivity sweep was rejected.
    #[error(transparent)]
    Sensitivity(#[from] SensitivityError),

    /// A parameter name did not parse.
    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameter),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing to the output stream failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
