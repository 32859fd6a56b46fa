//! CLI error types.

use dual_core::DualError;
use thiserror::Error;

/// Errors surfaced by `dualad` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Dual arithmetic failed: {0}")]
    Dual(#[from] DualError),

    #[error("Configuration file error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{failed} of {total} self-check scenarios failed")]
    CheckFailed { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
