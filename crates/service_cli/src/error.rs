//! CLI error types.

use landed_core::types::DomainError;
use landed_optimiser::OptimiserError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// A referenced file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// A scenario file failed to parse.
    #[error("failed to parse scenario {path}: {message}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Parser diagnostics.
        message: String,
    },

    /// An argument value is not supported.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine rejected the scenario.
    #[error("engine error: {0}")]
    Engine(#[from] DomainError),

    /// The order-size search found no feasible candidate.
    #[error("optimiser error: {0}")]
    Optimiser(#[from] OptimiserError),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failure.
    #[error("serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}
