//! Error types for the cache store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// An expired key is reported as `NotFound`; callers cannot tell an expired
/// entry apart from one that was never set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// The store has been closed and no longer accepts operations
    #[error("Cache store is unavailable")]
    StoreUnavailable,

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::NotFound("foo".to_string());
        assert_eq!(err.to_string(), "Key not found: foo");

        assert_eq!(
            CacheError::StoreUnavailable.to_string(),
            "Cache store is unavailable"
        );

        let err = CacheError::InvalidArgument("ttl must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: ttl must be positive");
    }
}
