//! API error types

use tailmatch_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
