//! Core error types (deterministic only)

use core::fmt;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A history ring with zero capacity was requested
    ZeroCapacity,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ZeroCapacity => write!(f, "history capacity must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
