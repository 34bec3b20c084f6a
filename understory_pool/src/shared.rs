// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::PoolError;
use crate::handle::{PoolHandle, PoolId};
use crate::pool::{ObjectPool, Poolable};

/// An [`ObjectPool`] behind a mutex.
///
/// Every operation takes the lock for its own duration only. The pool's
/// invariants hold between operations, so a poisoned lock is recovered
/// rather than propagated.
#[derive(Debug)]
pub struct SharedObjectPool<T> {
    inner: Mutex<ObjectPool<T>>,
}

impl<T: Poolable> SharedObjectPool<T> {
    /// Creates a shared pool of `capacity` values produced by `factory`.
    #[must_use]
    pub fn new(capacity: usize, factory: fn() -> T) -> Self {
        Self::from_pool(ObjectPool::new(capacity, factory))
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn from_pool(pool: ObjectPool<T>) -> Self {
        Self {
            inner: Mutex::new(pool),
        }
    }

    /// The wrapped pool's identity.
    #[must_use]
    pub fn id(&self) -> PoolId {
        self.lock().id()
    }

    /// See [`ObjectPool::acquire`].
    #[doc(alias = "get")]
    pub fn acquire(&self) -> Result<PoolHandle<T>, PoolError> {
        self.lock().acquire()
    }

    /// See [`ObjectPool::recycle`].
    pub fn recycle(&self, handle: PoolHandle<T>) -> Result<(), PoolError> {
        self.lock().recycle(handle)
    }

    /// See [`ObjectPool::recycle_all`].
    pub fn recycle_all(&self, handles: &[PoolHandle<T>]) -> Result<(), PoolError> {
        self.lock().recycle_all(handles)
    }

    /// Runs `f` on the value behind a live handle while holding the lock.
    pub fn with_value<R>(
        &self,
        handle: PoolHandle<T>,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, PoolError> {
        let mut pool = self.lock();
        pool.value_mut(handle).map(f)
    }

    /// Unwraps the inner pool.
    #[must_use]
    pub fn into_inner(self) -> ObjectPool<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, ObjectPool<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    use super::SharedObjectPool;
    use crate::{PoolError, Poolable};

    #[derive(Debug, Default)]
    struct Cell(u64);

    impl Poolable for Cell {
        fn reset(&mut self) {
            self.0 = 0;
        }
    }

    #[test]
    fn concurrent_acquire_and_recycle() {
        let pool = Arc::new(SharedObjectPool::new(4, Cell::default));
        let workers: Vec<_> = (0..4)
            .map(|n| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let h = pool.acquire().unwrap();
                        pool.with_value(h, |c| c.0 = n).unwrap();
                        pool.recycle(h).unwrap();
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        let pool = Arc::into_inner(pool).unwrap().into_inner();
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn shared_pool_still_rejects_double_recycle() {
        let pool = SharedObjectPool::new(2, Cell::default);
        let h = pool.acquire().unwrap();
        pool.recycle(h).unwrap();
        assert_eq!(
            pool.recycle(h),
            Err(PoolError::DoubleRecycle { pool: pool.id() })
        );
    }
}
