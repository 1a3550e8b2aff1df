//! Scoped borrows that return themselves to the pool

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::pool::Pool;

/// A pooled object that automatically returns to the pool when dropped
///
/// # Examples
///
/// ```
/// use stack_objectpool::Pool;
///
/// let pool: Pool<Vec<u8>> = Pool::new(4);
/// pool.give(Vec::with_capacity(1024)).unwrap();
///
/// {
///     let mut buf = pool.take_guarded().unwrap();
///     buf.extend_from_slice(b"hello");
///     assert_eq!(pool.size(), 0);
/// }
///
/// assert_eq!(pool.size(), 1);
/// ```
pub struct PooledObject<'a, T> {
    value: Option<T>,
    pool: &'a Pool<T>,
}

impl<'a, T> PooledObject<'a, T> {
    pub(crate) fn new(value: T, pool: &'a Pool<T>) -> Self {
        Self {
            value: Some(value),
            pool,
        }
    }

    /// Take the inner value so it is never returned to the pool
    pub fn detach(mut self) -> T {
        self.value.take().expect("Value already taken")
    }
}

impl<T> Deref for PooledObject<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value.as_ref().expect("Value already taken")
    }
}

impl<T> DerefMut for PooledObject<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value.as_mut().expect("Value already taken")
    }
}

impl<T> Drop for PooledObject<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            // A rejected return drops the object here.
            if let Err(err) = self.pool.give(value) {
                trace!(error = %err, "guarded object discarded on return");
            }
        }
    }
}
