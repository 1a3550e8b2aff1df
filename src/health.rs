//! Health reporting for object pools

use crate::config::CapacityPolicy;
use crate::metrics::fill_ratio;

/// Health status of an object pool
///
/// # Examples
///
/// ```
/// use stack_objectpool::Pool;
///
/// let pool: Pool<u32> = Pool::new(2);
/// pool.give(1).unwrap();
///
/// let health = pool.health_status();
/// assert!(health.is_healthy());
/// assert_eq!(health.available_objects, 1);
/// ```
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the pool is healthy
    pub is_healthy: bool,

    /// Number of warnings detected
    pub warning_count: usize,

    /// Fill ratio of the pool
    pub utilization: f64,

    /// Available objects count
    pub available_objects: usize,

    /// Declared capacity
    pub capacity: usize,

    /// Warning messages
    pub warnings: Vec<String>,
}

impl HealthStatus {
    /// Create a new health status
    pub fn new(available: usize, capacity: usize, policy: CapacityPolicy) -> Self {
        let utilization = fill_ratio(available, capacity);

        let mut warnings = Vec::new();
        let mut is_healthy = true;

        // Only reachable under an advisory capacity
        if available > capacity {
            warnings.push(format!(
                "Pool holds {} objects, above its {:?} capacity of {}",
                available, policy, capacity
            ));
            is_healthy = false;
        }

        if available == 0 {
            warnings.push("Pool is empty".to_string());
        }

        Self {
            is_healthy,
            warning_count: warnings.len(),
            utilization,
            available_objects: available,
            capacity,
            warnings,
        }
    }

    /// Check if the pool is healthy
    pub fn is_healthy(&self) -> bool {
        self.is_healthy
    }
}
