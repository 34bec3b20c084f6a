// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::handle::PoolId;

/// Misuse of an [`ObjectPool`](crate::ObjectPool).
///
/// Every variant except [`PoolError::Exhausted`] indicates a lifetime bug in
/// the caller: a handle was kept after it was given back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// The handle was already recycled and not acquired again since.
    #[error("handle was already recycled into {pool}")]
    DoubleRecycle {
        /// The pool that owns the slot.
        pool: PoolId,
    },
    /// The handle was issued by a different pool.
    #[error("handle issued by {handle_pool} cannot be recycled into {pool}")]
    ForeignPool {
        /// The pool that issued the handle.
        handle_pool: PoolId,
        /// The pool the handle was offered to.
        pool: PoolId,
    },
    /// The handle's slot has been recycled and handed out again.
    #[error("handle refers to a slot of {pool} that has been reacquired")]
    StaleHandle {
        /// The pool that owns the slot.
        pool: PoolId,
    },
    /// The pool is empty and its replenish percentage is zero.
    #[error("{pool} is empty and does not replenish")]
    Exhausted {
        /// The empty pool.
        pool: PoolId,
    },
}
