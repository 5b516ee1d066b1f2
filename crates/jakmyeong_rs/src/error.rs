//! Unified error type for the facade.

use jakmyeong_naming::NamingError;
use jakmyeong_saju::SajuError;
use jakmyeong_time::TimeError;
use thiserror::Error;

/// Errors from any layer reachable through the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JakmyeongError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Saju(#[from] SajuError),

    #[error(transparent)]
    Naming(#[from] NamingError),
}
