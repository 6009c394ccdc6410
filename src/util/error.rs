//! Error types for the time sample library.

use thiserror::Error;

use crate::core::TimeCode;
use super::{Chrono, Interval};

/// Main error type for time code and time sample operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operation is not valid for this value (e.g. numeric value of the default time)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Interval query with a finite open endpoint
    #[error("Invalid interval {0}: finite endpoints must be closed")]
    InvalidInterval(Interval),

    /// Sample time is not a finite number
    #[error("Invalid sample time: {0} is not finite")]
    InvalidTime(Chrono),

    /// Sentinel time code where a real sample time is required
    #[error("Cannot write a time sample at sentinel time {0}")]
    SentinelTime(TimeCode),

    /// Text could not be parsed as a time code
    #[error("Cannot parse time code from {0:?}")]
    ParseTimeCode(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an invalid operation error.
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

/// Result type alias for time sample operations.
pub type Result<T> = std::result::Result<T, Error>;
