//! Top-level error types for the bundler binary.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type returned by [`crate::cli::run`].
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Pipeline errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Process exit code for this error.
    ///
    /// Argument problems exit with 2, pipeline failures with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::Cli(_) => 2,
            BundlerError::Bundler(crate::bundler::Error::InvalidPath { .. }) => 2,
            BundlerError::Bundler(_) => 1,
        }
    }
}
