//! Error types for dictionary loading and scoring configuration.

use thiserror::Error;

/// Errors from loading a dictionary or a scoring configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NamingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed scoring config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config parsed but holds unusable values.
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),
}
