//! Core error types for ferrule-ident crate
//!
//! Every failure in this crate is a local construction-time failure. Hashing
//! and keyword table lookups are infallible once a valid name exists.

use thiserror::Error;

/// Error type for identifier construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    /// The local name or namespace of a qualified name was rejected
    ///
    /// Raised for an empty local name, an empty namespace, or a namespace
    /// containing the `/` separator.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// A runtime configuration value was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IdentError {
    /// Returns true for [`IdentError::InvalidName`]
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, IdentError::InvalidName(_))
    }
}

/// Result type alias for identifier operations
pub type IdentResult<T> = std::result::Result<T, IdentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let err = IdentError::InvalidName("local name must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid name: local name must not be empty");
        assert!(err.is_invalid_name());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = IdentError::InvalidConfig("shard_amount must be a power of two".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: shard_amount must be a power of two"
        );
        assert!(!err.is_invalid_name());
    }
}
