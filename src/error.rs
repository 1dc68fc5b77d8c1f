//! Error types for wiring and time-string parsing

use thiserror::Error;

/// Raised when the controller is built without one of its collaborators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no display surface was wired to the stopwatch")]
    MissingDisplay,
    #[error("no scheduler was wired to the stopwatch")]
    MissingScheduler,
    #[error("input closed before any command was read; the stopwatch cannot be controlled")]
    NoControls,
}

/// Raised when an `HH:MM:SS` string cannot be turned back into seconds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected HH:MM:SS, got {0:?}")]
    Malformed(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u64 },
    #[error("time value overflows the seconds counter")]
    Overflow,
}
