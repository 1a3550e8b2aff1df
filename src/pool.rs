//! Core object pool implementation

use crate::config::{CapacityPolicy, PoolConfiguration};
use crate::errors::{GiveError, PoolError, PoolResult};
use crate::guard::PooledObject;
use crate::health::HealthStatus;
use crate::metrics::{MetricsExporter, MetricsTracker, PoolMetrics};

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Thread-safe LIFO object pool
///
/// Objects enter the pool only through [`give`](Pool::give) and leave it
/// through [`take`](Pool::take). Both move ownership, so an object is either
/// stored in the pool or held by exactly one caller. The most recently
/// returned object is the next one lent out.
///
/// Dropping the pool drops every object still stored in it. Objects that are
/// lent out at that point belong to their callers and are not affected.
///
/// # Examples
///
/// ```
/// use stack_objectpool::Pool;
///
/// let pool: Pool<String> = Pool::new(10);
/// pool.give("a".to_string()).unwrap();
/// pool.give("b".to_string()).unwrap();
///
/// assert_eq!(pool.size(), 2);
/// assert_eq!(pool.take().unwrap(), "b");
/// assert_eq!(pool.take().unwrap(), "a");
/// assert!(pool.take().is_err());
/// ```
pub struct Pool<T> {
    items: Mutex<Vec<T>>,
    capacity: usize,
    policy: CapacityPolicy,
    metrics: MetricsTracker,
}

impl<T> Pool<T> {
    /// Create an empty pool with an advisory capacity
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, CapacityPolicy::Advisory)
    }

    /// Create an empty pool from a signed capacity, rejecting negative values
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_objectpool::{Pool, PoolError};
    ///
    /// assert!(Pool::<u8>::try_new(0).is_ok());
    /// assert!(matches!(
    ///     Pool::<u8>::try_new(-1),
    ///     Err(PoolError::InvalidConfiguration(_))
    /// ));
    /// ```
    pub fn try_new(capacity: i64) -> PoolResult<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            PoolError::InvalidConfiguration(format!(
                "capacity must not be negative, got {}",
                capacity
            ))
        })?;
        Ok(Self::new(capacity))
    }

    /// Create an empty pool from a validated configuration
    pub fn with_config(config: PoolConfiguration) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self::build(config.capacity, config.capacity_policy))
    }

    fn build(capacity: usize, policy: CapacityPolicy) -> Self {
        debug!(capacity, ?policy, "creating object pool");
        Self {
            items: Mutex::new(Vec::new()),
            capacity,
            policy,
            metrics: MetricsTracker::new(),
        }
    }

    /// Declared capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity policy the pool was built with
    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Number of objects currently stored
    pub fn size(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether no objects are stored
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Take the most recently returned object
    pub fn take(&self) -> PoolResult<T> {
        let popped = {
            let mut items = self.items.lock();
            items.pop().map(|item| (item, items.len()))
        };

        match popped {
            Some((item, remaining)) => {
                self.metrics.record_taken();
                trace!(remaining, "object taken from pool");
                Ok(item)
            }
            None => {
                self.metrics.record_empty();
                trace!("take on empty pool");
                Err(PoolError::PoolEmpty)
            }
        }
    }

    /// Try to take an object without an error
    pub fn try_take(&self) -> Option<T> {
        self.take().ok()
    }

    /// Take an object that goes back to the pool when dropped
    pub fn take_guarded(&self) -> PoolResult<PooledObject<'_, T>> {
        self.take().map(|item| PooledObject::new(item, self))
    }

    /// Return an object to the pool
    ///
    /// Passing `None` fails with [`GiveError::InvalidArgument`]. Under
    /// [`CapacityPolicy::Enforced`], a pool that is already at capacity
    /// rejects the object with [`GiveError::PoolFull`] and hands it back.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_objectpool::{GiveError, Pool};
    ///
    /// let pool: Pool<u32> = Pool::new(1);
    /// pool.give(1).unwrap();
    /// pool.give(Some(2)).unwrap();
    /// assert!(matches!(pool.give(None::<u32>), Err(GiveError::InvalidArgument)));
    ///
    /// // Advisory capacity lets the pool grow past it.
    /// assert_eq!(pool.size(), 2);
    /// ```
    pub fn give(&self, item: impl Into<Option<T>>) -> Result<(), GiveError<T>> {
        let Some(item) = item.into() else {
            self.metrics.record_rejected();
            trace!("rejected absent object");
            return Err(GiveError::InvalidArgument);
        };

        let pushed = {
            let mut items = self.items.lock();
            if self.policy == CapacityPolicy::Enforced && items.len() >= self.capacity {
                Err(item)
            } else {
                items.push(item);
                Ok(items.len())
            }
        };

        match pushed {
            Ok(size) => {
                self.metrics.record_returned();
                trace!(size, "object returned to pool");
                Ok(())
            }
            Err(item) => {
                self.metrics.record_rejected();
                trace!(capacity = self.capacity, "rejected object beyond capacity");
                Err(GiveError::PoolFull {
                    item,
                    capacity: self.capacity,
                })
            }
        }
    }

    /// Get pool metrics
    pub fn metrics(&self) -> PoolMetrics {
        self.metrics.get_metrics(self.size(), self.capacity)
    }

    /// Export metrics
    pub fn export_metrics(&self) -> HashMap<String, String> {
        self.metrics().export()
    }

    /// Export metrics in Prometheus format
    pub fn export_metrics_prometheus(
        &self,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        MetricsExporter::export_prometheus(&self.metrics(), pool_name, tags)
    }

    /// Get health status
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::new(self.size(), self.capacity, self.policy)
    }
}

impl<T> Drop for Pool<T> {
    fn drop(&mut self) {
        let items = self.items.get_mut();
        let released = items.len();
        while let Some(item) = items.pop() {
            drop(item);
        }
        debug!(released, "object pool torn down");
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("size", &self.size())
            .finish()
    }
}
