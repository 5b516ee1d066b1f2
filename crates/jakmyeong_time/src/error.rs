//! Error types for date and birth-input validation.

use thiserror::Error;

/// Errors from date parsing or birth-input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not parse, or named a day that does not exist.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Hour outside 0..=23.
    #[error("hour {0} outside 0..=23")]
    HourOutOfRange(u8),
    /// Minute outside 0..=59.
    #[error("minute {0} outside 0..=59")]
    MinuteOutOfRange(u8),
    /// Gender label not recognised.
    #[error("unknown gender: {0}")]
    UnknownGender(String),
}
