//! Error types for the bglaunch CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for launch operations.
///
/// Each variant maps to a distinct exit code so scripts can tell a
/// filesystem problem apart from a missing executable.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The log directory or log file could not be created.
    #[error("{0}")]
    FilesystemError(String),

    /// The operating system refused to create the child process.
    #[error("{0}")]
    SpawnError(String),

    /// Invalid configuration or arguments.
    #[error("{0}")]
    UserError(String),
}

impl LaunchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::FilesystemError(_) => exit_codes::FILESYSTEM_FAILURE,
            LaunchError::SpawnError(_) => exit_codes::SPAWN_FAILURE,
            LaunchError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for launch operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
