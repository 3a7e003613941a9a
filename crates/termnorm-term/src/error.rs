//! Errors raised by the terminal shell.

use std::io;

use termnorm_core::DriverError;
use termnorm_menu::ExtractError;
use thiserror::Error;

/// Terminal shell errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Menu extraction failed.
    #[error("menu extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// The event source reported an unrecoverable failure.
    #[error("event source failed: {0}")]
    Driver(DriverError),
}

impl From<DriverError> for TerminalError {
    fn from(err: DriverError) -> Self {
        Self::Driver(err)
    }
}
