// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of an [`ObjectPool`](crate::ObjectPool).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct PoolId(u32);

impl PoolId {
    pub(crate) fn next() -> Self {
        Self(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric id.
    #[inline]
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool #{}", self.0)
    }
}

/// Typed reference to a value living in an [`ObjectPool`](crate::ObjectPool).
///
/// A handle records the pool that issued it and the generation of its slot at
/// the time of acquisition. Handles are `Copy`; the pool, not the type
/// system, detects a handle that outlived its borrow.
pub struct PoolHandle<T> {
    pool: PoolId,
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PoolHandle<T> {
    pub(crate) fn new(pool: PoolId, index: u32, generation: u32) -> Self {
        Self {
            pool,
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// The pool that issued this handle.
    #[inline]
    #[must_use]
    pub fn pool(self) -> PoolId {
        self.pool
    }

    /// The slot generation this handle was issued for.
    #[inline]
    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

impl<T> Clone for PoolHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PoolHandle<T> {}

impl<T> PartialEq for PoolHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pool == other.pool && self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for PoolHandle<T> {}

impl<T> Hash for PoolHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pool.hash(state);
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for PoolHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolHandle")
            .field("pool", &self.pool)
            .field("index", &self.index)
            .field("generation", &self.generation)
            .finish()
    }
}
