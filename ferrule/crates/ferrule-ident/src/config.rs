//! Configuration Module - Runtime Tuning Parameters
//!
//! Controls how a [`Runtime`](crate::Runtime) lays out its keyword table.
//! None of these settings change hash codes or equality semantics.

use serde::{Deserialize, Serialize};

use crate::error::{IdentError, IdentResult};
use crate::hash::DEFAULT_STRING_HASH_CACHE_LIMIT;
use crate::table::DEFAULT_TABLE_CAPACITY;

/// Configuration for an identifier runtime
///
/// # Examples
///
/// ```rust
/// use ferrule_ident::{Runtime, RuntimeConfig};
///
/// let config = RuntimeConfig {
///     initial_capacity: 4096,
///     shard_amount: Some(16),
///     ..Default::default()
/// };
/// let rt = Runtime::with_config(config).unwrap();
/// assert!(rt.keywords().len() > 0); // constants preloaded
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Number of keyword slots allocated up front
    ///
    /// Default: 256
    pub initial_capacity: usize,

    /// Number of independently locked shards in the keyword table
    ///
    /// Must be a power of two greater than one. `None` lets the map choose
    /// from the number of CPUs.
    ///
    /// Default: None
    pub shard_amount: Option<usize>,

    /// Entries kept in the namespace hash cache before it is flushed
    ///
    /// Default: 255
    pub namespace_hash_cache_limit: usize,

    /// Intern the known core keywords when the runtime starts
    ///
    /// Default: true
    pub preload_constants: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_TABLE_CAPACITY,
            shard_amount: None,
            namespace_hash_cache_limit: DEFAULT_STRING_HASH_CACHE_LIMIT,
            preload_constants: true,
        }
    }
}

impl RuntimeConfig {
    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> IdentResult<()> {
        if let Some(shards) = self.shard_amount {
            if shards < 2 || !shards.is_power_of_two() {
                return Err(IdentError::InvalidConfig(format!(
                    "shard_amount must be a power of two greater than 1, got {}",
                    shards
                )));
            }
        }

        if self.namespace_hash_cache_limit == 0 {
            return Err(IdentError::InvalidConfig(
                "namespace_hash_cache_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RuntimeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_capacity, 256);
        assert_eq!(config.namespace_hash_cache_limit, 255);
        assert!(config.preload_constants);
    }

    #[test]
    fn test_shard_amount_validation() {
        for bad in [0, 1, 3, 12] {
            let config = RuntimeConfig {
                shard_amount: Some(bad),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(IdentError::InvalidConfig(_))
            ));
        }

        let config = RuntimeConfig {
            shard_amount: Some(32),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_limit_validation() {
        let config = RuntimeConfig {
            namespace_hash_cache_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
