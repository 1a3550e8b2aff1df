//! Error types for the object pool

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Pool is empty - no objects available")]
    PoolEmpty,

    #[error("Pool is at maximum capacity")]
    PoolFull,

    #[error("Cannot return an absent object to the pool")]
    InvalidArgument,

    #[error("Invalid pool configuration: {0}")]
    InvalidConfiguration(String),
}

pub type PoolResult<T> = Result<T, PoolError>;

/// Failure of [`Pool::give`](crate::Pool::give).
///
/// A rejected return never keeps the object: [`GiveError::PoolFull`] hands it
/// back so the caller can decide what to do with it.
///
/// # Examples
///
/// ```
/// use stack_objectpool::{GiveError, Pool, PoolConfiguration};
///
/// let config = PoolConfiguration::new().with_capacity(1).enforce_capacity();
/// let pool: Pool<&str> = Pool::with_config(config).unwrap();
///
/// pool.give("first").unwrap();
/// let err = pool.give("second").unwrap_err();
/// assert!(matches!(err, GiveError::PoolFull { capacity: 1, .. }));
/// assert_eq!(err.into_item(), Some("second"));
/// ```
#[derive(Error)]
pub enum GiveError<T> {
    #[error("Cannot return an absent object to the pool")]
    InvalidArgument,

    #[error("Pool is at maximum capacity ({capacity})")]
    PoolFull { item: T, capacity: usize },
}

impl<T> GiveError<T> {
    /// Recover the rejected object, if there was one
    pub fn into_item(self) -> Option<T> {
        match self {
            GiveError::InvalidArgument => None,
            GiveError::PoolFull { item, .. } => Some(item),
        }
    }

    /// The item-free error kind
    pub fn kind(&self) -> PoolError {
        match self {
            GiveError::InvalidArgument => PoolError::InvalidArgument,
            GiveError::PoolFull { .. } => PoolError::PoolFull,
        }
    }
}

// Manual impl so `T` does not need to be `Debug`.
impl<T> fmt::Debug for GiveError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GiveError::InvalidArgument => f.write_str("InvalidArgument"),
            GiveError::PoolFull { capacity, .. } => f
                .debug_struct("PoolFull")
                .field("capacity", capacity)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> From<GiveError<T>> for PoolError {
    fn from(err: GiveError<T>) -> Self {
        err.kind()
    }
}
