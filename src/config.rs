//! Pool configuration options

use crate::errors::{PoolError, PoolResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the pool treats its capacity when objects are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapacityPolicy {
    /// Capacity is metadata only; returns are never rejected for size
    #[default]
    Advisory,

    /// Returns that would grow the pool past capacity fail with `PoolFull`
    Enforced,
}

/// Configuration for object pool behavior
///
/// # Examples
///
/// ```
/// use stack_objectpool::{CapacityPolicy, PoolConfiguration};
///
/// let config = PoolConfiguration::new()
///     .with_capacity(16)
///     .enforce_capacity();
///
/// assert_eq!(config.capacity, 16);
/// assert_eq!(config.capacity_policy, CapacityPolicy::Enforced);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolConfiguration {
    /// Intended maximum number of objects held by the pool
    pub capacity: usize,

    /// Whether `capacity` is checked on return
    pub capacity_policy: CapacityPolicy,
}

impl Default for PoolConfiguration {
    fn default() -> Self {
        Self {
            capacity: 100,
            capacity_policy: CapacityPolicy::Advisory,
        }
    }
}

impl PoolConfiguration {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pool capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the capacity policy
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }

    /// Reject returns beyond capacity
    pub fn enforce_capacity(self) -> Self {
        self.with_capacity_policy(CapacityPolicy::Enforced)
    }

    /// Check that the configuration describes a usable pool
    pub fn validate(&self) -> PoolResult<()> {
        if self.capacity_policy == CapacityPolicy::Enforced && self.capacity == 0 {
            return Err(PoolError::InvalidConfiguration(
                "enforced capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PoolConfiguration::default();
        assert_eq!(config.capacity, 100);
        assert_eq!(config.capacity_policy, CapacityPolicy::Advisory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_advisory_capacity_is_valid() {
        let config = PoolConfiguration::new().with_capacity(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_enforced_capacity_is_rejected() {
        let config = PoolConfiguration::new().with_capacity(0).enforce_capacity();
        assert!(matches!(
            config.validate(),
            Err(PoolError::InvalidConfiguration(_))
        ));
    }
}
