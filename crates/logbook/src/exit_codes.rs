//! Exit codes for the CLI

use thiserror::Error;

/// General error
pub const ERROR: u8 = 1;

/// Release metadata or configuration failed validation
pub const VALIDATION_ERROR: u8 = 2;

/// A command that has already reported its outcome and only sets the exit code
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CommandFailed {
    pub code: u8,
    pub message: String,
}

impl CommandFailed {
    /// Create a failure with an exit code
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Exit code for an error returned by a command
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CommandFailed>()
        .map_or(ERROR, |failed| failed.code)
}
