//! Metrics collection and export for object pools

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metrics data for a pool
///
/// # Examples
///
/// ```
/// use stack_objectpool::Pool;
///
/// let pool: Pool<u32> = Pool::new(4);
/// pool.give(1).unwrap();
/// pool.give(2).unwrap();
/// let _one = pool.take().unwrap();
///
/// let metrics = pool.metrics();
/// assert_eq!(metrics.total_returned, 2);
/// assert_eq!(metrics.total_taken, 1);
/// assert_eq!(metrics.available_objects, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolMetrics {
    /// Successful takes
    pub total_taken: usize,

    /// Successful gives
    pub total_returned: usize,

    /// Takes that found the pool empty
    pub pool_empty_events: usize,

    /// Gives rejected for an absent object or a full pool
    pub rejected_returns: usize,

    /// Objects currently in the pool
    pub available_objects: usize,

    /// Fill ratio of the pool; above 1.0 when an advisory capacity is exceeded
    pub utilization: f64,

    /// Declared capacity
    pub capacity: usize,
}

impl PoolMetrics {
    /// Export metrics as a HashMap
    pub fn export(&self) -> HashMap<String, String> {
        let mut metrics = HashMap::new();
        metrics.insert("total_taken".to_string(), self.total_taken.to_string());
        metrics.insert("total_returned".to_string(), self.total_returned.to_string());
        metrics.insert("pool_empty_events".to_string(), self.pool_empty_events.to_string());
        metrics.insert("rejected_returns".to_string(), self.rejected_returns.to_string());
        metrics.insert("available_objects".to_string(), self.available_objects.to_string());
        metrics.insert("utilization".to_string(), format!("{:.2}", self.utilization));
        metrics.insert("capacity".to_string(), self.capacity.to_string());
        metrics
    }
}

/// Metrics exporter for Prometheus format
pub struct MetricsExporter;

impl MetricsExporter {
    /// Export metrics in Prometheus exposition format
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_objectpool::Pool;
    /// use std::collections::HashMap;
    ///
    /// let pool: Pool<u32> = Pool::new(8);
    ///
    /// let mut tags = HashMap::new();
    /// tags.insert("service".to_string(), "db".to_string());
    ///
    /// let output = pool.export_metrics_prometheus("connections", Some(&tags));
    /// assert!(output.contains("objectpool_objects_available"));
    /// assert!(output.contains("service=\"db\""));
    /// ```
    pub fn export_prometheus(
        metrics: &PoolMetrics,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        let mut output = String::new();
        let labels = Self::format_labels(pool_name, tags);

        // Gauge metrics
        output.push_str("# HELP objectpool_objects_available Objects currently in the pool\n");
        output.push_str("# TYPE objectpool_objects_available gauge\n");
        output.push_str(&format!("objectpool_objects_available{{{}}} {}\n", labels, metrics.available_objects));

        output.push_str("# HELP objectpool_capacity Declared pool capacity\n");
        output.push_str("# TYPE objectpool_capacity gauge\n");
        output.push_str(&format!("objectpool_capacity{{{}}} {}\n", labels, metrics.capacity));

        output.push_str("# HELP objectpool_utilization Pool fill ratio\n");
        output.push_str("# TYPE objectpool_utilization gauge\n");
        output.push_str(&format!("objectpool_utilization{{{}}} {:.2}\n", labels, metrics.utilization));

        // Counter metrics
        output.push_str("# HELP objectpool_objects_taken_total Total objects taken\n");
        output.push_str("# TYPE objectpool_objects_taken_total counter\n");
        output.push_str(&format!("objectpool_objects_taken_total{{{}}} {}\n", labels, metrics.total_taken));

        output.push_str("# HELP objectpool_objects_returned_total Total objects returned\n");
        output.push_str("# TYPE objectpool_objects_returned_total counter\n");
        output.push_str(&format!("objectpool_objects_returned_total{{{}}} {}\n", labels, metrics.total_returned));

        output.push_str("# HELP objectpool_events_empty_total Pool empty events\n");
        output.push_str("# TYPE objectpool_events_empty_total counter\n");
        output.push_str(&format!("objectpool_events_empty_total{{{}}} {}\n", labels, metrics.pool_empty_events));

        output.push_str("# HELP objectpool_returns_rejected_total Rejected returns\n");
        output.push_str("# TYPE objectpool_returns_rejected_total counter\n");
        output.push_str(&format!("objectpool_returns_rejected_total{{{}}} {}\n", labels, metrics.rejected_returns));

        output
    }

    fn format_labels(pool_name: &str, tags: Option<&HashMap<String, String>>) -> String {
        let mut labels = vec![format!("pool=\"{}\"", pool_name)];

        if let Some(tags) = tags {
            // Sorted so the output is stable across runs.
            let mut tags: Vec<_> = tags.iter().collect();
            tags.sort();
            for (key, value) in tags {
                labels.push(format!("{}=\"{}\"", key, value));
            }
        }

        labels.join(",")
    }
}

/// Internal metrics tracker
#[derive(Debug, Default)]
pub(crate) struct MetricsTracker {
    pub total_taken: AtomicUsize,
    pub total_returned: AtomicUsize,
    pub pool_empty_events: AtomicUsize,
    pub rejected_returns: AtomicUsize,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_taken(&self) {
        self.total_taken.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_returned(&self) {
        self.total_returned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty(&self) {
        self.pool_empty_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected_returns.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_metrics(&self, available: usize, capacity: usize) -> PoolMetrics {
        PoolMetrics {
            total_taken: self.total_taken.load(Ordering::Relaxed),
            total_returned: self.total_returned.load(Ordering::Relaxed),
            pool_empty_events: self.pool_empty_events.load(Ordering::Relaxed),
            rejected_returns: self.rejected_returns.load(Ordering::Relaxed),
            available_objects: available,
            utilization: fill_ratio(available, capacity),
            capacity,
        }
    }
}

pub(crate) fn fill_ratio(available: usize, capacity: usize) -> f64 {
    if capacity > 0 {
        available as f64 / capacity as f64
    } else {
        0.0
    }
}
