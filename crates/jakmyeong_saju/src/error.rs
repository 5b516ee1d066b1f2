//! Error types for chart computation.

use jakmyeong_time::TimeError;
use thiserror::Error;

/// Errors from saju chart computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Unparseable date, hour outside 0..=23, or minute outside 0..=59.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] TimeError),
}
