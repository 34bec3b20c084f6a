// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pool --heading-base-level=0

//! Understory Pool: owner-checked object pools for per-frame scratch values.
//!
//! Renderers that map thousands of points per frame want their scratch
//! geometry to live in storage that is reused between frames. This crate
//! provides a small slab-style pool whose entries are addressed through
//! typed, generational [`PoolHandle`]s:
//!
//! - [`ObjectPool::acquire`] hands out a handle to an unowned value, refilling
//!   a portion of the pool first when it is empty.
//! - [`ObjectPool::recycle`] returns a value to the pool, resetting it through
//!   [`Poolable::reset`]. Recycling the same handle twice, recycling a handle
//!   into a pool that did not issue it, or recycling a handle whose slot has
//!   since been handed out again are all rejected with a [`PoolError`].
//! - [`ObjectPool::recycle_all`] validates a whole batch before growing the
//!   free list once.
//!
//! With the `std` feature, [`SharedObjectPool`] wraps a pool in a mutex for
//! hosts that touch it from more than one thread. With the `kurbo` feature,
//! Kurbo's `Point`, `Vec2`, `Size`, `Rect` and `Affine` implement
//! [`Poolable`].
//!
//! ## Example
//!
//! ```rust
//! use understory_pool::{ObjectPool, PoolError, Poolable};
//!
//! #[derive(Debug, Default)]
//! struct Scratch {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Poolable for Scratch {
//!     fn reset(&mut self) {
//!         *self = Self::default();
//!     }
//! }
//!
//! let mut pool = ObjectPool::new(4, Scratch::default);
//! let handle = pool.acquire().unwrap();
//! pool.value_mut(handle).unwrap().x = 3.0;
//!
//! pool.recycle(handle).unwrap();
//! assert!(matches!(pool.recycle(handle), Err(PoolError::DoubleRecycle { .. })));
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
#[cfg(feature = "kurbo")]
mod geometry;
mod handle;
mod pool;
#[cfg(feature = "std")]
mod shared;

pub use error::PoolError;
pub use handle::{PoolHandle, PoolId};
pub use pool::{DEFAULT_REPLENISH_PERCENTAGE, ObjectPool, Poolable};
#[cfg(feature = "std")]
pub use shared::SharedObjectPool;
