//! # stack_objectpool
//!
//! Thread-safe LIFO object pool for recycling values that are expensive to
//! construct.
//!
//! ## Features
//!
//! - Single-lock LIFO store with short, non-blocking critical sections
//! - Ownership transfer on take and give: an object is in the pool or held
//!   by one caller, never both
//! - Advisory or enforced capacity
//! - Automatic return of objects via RAII (Drop trait)
//! - Metrics with Prometheus text export
//! - Health reporting
//!
//! ## Quick Start
//!
//! ```rust
//! use stack_objectpool::Pool;
//!
//! let pool: Pool<Vec<u8>> = Pool::new(8);
//! pool.give(Vec::with_capacity(4096)).unwrap();
//!
//! let mut buf = pool.take().unwrap();
//! buf.push(1);
//! buf.clear();
//! pool.give(buf).unwrap();
//!
//! assert_eq!(pool.size(), 1);
//! ```

mod config;
mod errors;
mod guard;
mod health;
mod metrics;
mod pool;

pub use config::{CapacityPolicy, PoolConfiguration};
pub use errors::{GiveError, PoolError, PoolResult};
pub use guard::PooledObject;
pub use health::HealthStatus;
pub use metrics::{MetricsExporter, PoolMetrics};
pub use pool::Pool;
