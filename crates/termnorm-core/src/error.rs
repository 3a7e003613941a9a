//! Error types surfaced by the raw event source.
//!
//! The translator never recovers from driver failures. A [`DriverError`] is
//! carried unmodified through [`crate::NormalizedEvent::Error`] and the caller
//! decides whether to keep polling.

use std::io;

use thiserror::Error;

/// Errors reported by the underlying terminal driver.
///
/// Stored as owned text so the error can ride inside a `Clone + PartialEq`
/// event value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Reading from the terminal failed; retrying may succeed.
    #[error("terminal I/O error: {0}")]
    Io(String),

    /// The terminal is gone or unusable; retrying cannot succeed.
    #[error("terminal unusable: {0}")]
    Broken(String),

    /// The event source has no more events to deliver.
    #[error("event source closed")]
    Closed,
}

impl DriverError {
    /// Returns true if polling the same source again cannot succeed.
    ///
    /// [`DriverError::Io`] may be transient (e.g. an interrupted read). A
    /// broken terminal or a closed source never produces another event.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Broken(_) | Self::Closed)
    }
}

/// Convert `io::Error` to `DriverError` at the driver boundary.
///
/// Only interrupted, would-block and timed-out reads are worth retrying;
/// anything else (EIO on a vanished tty, a closed descriptor) is fatal.
impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                Self::Io(err.to_string())
            },
            _ => Self::Broken(err.to_string()),
        }
    }
}
