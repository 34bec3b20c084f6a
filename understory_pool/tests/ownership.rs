// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pool` crate.
//!
//! These exercise the ownership rules of `ObjectPool<T>`: a value is either
//! free in exactly one pool or handed out, and every handle can be given back
//! exactly once.

use understory_pool::{ObjectPool, PoolError, Poolable};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Pair {
    a: f64,
    b: f64,
}

impl Poolable for Pair {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[test]
fn handle_from_one_pool_cannot_enter_another() {
    let mut first = ObjectPool::new(3, Pair::default);
    let mut second = ObjectPool::new(3, Pair::default);

    let h = first.acquire().unwrap();
    let err = second.recycle(h).unwrap_err();
    assert_eq!(
        err,
        PoolError::ForeignPool {
            handle_pool: first.id(),
            pool: second.id(),
        }
    );

    // The rejected handle is still live in its own pool.
    first.value_mut(h).unwrap().a = 1.0;
    first.recycle(h).unwrap();
}

#[test]
fn double_recycle_without_acquire_is_rejected() {
    let mut pool = ObjectPool::new(3, Pair::default);
    let h = pool.acquire().unwrap();
    pool.recycle(h).unwrap();
    assert!(matches!(pool.recycle(h), Err(PoolError::DoubleRecycle { .. })));
}

#[test]
fn growth_past_initial_capacity_keeps_every_value() {
    let mut pool = ObjectPool::new(4, Pair::default);
    let handles: Vec<_> = (0..37).map(|_| pool.acquire().unwrap()).collect();
    for (i, h) in handles.iter().enumerate() {
        let v = pool.value_mut(*h).unwrap();
        v.a = i as f64;
        v.b = -(i as f64);
    }
    for (i, h) in handles.iter().enumerate() {
        let v = pool.value(*h).unwrap();
        assert_eq!(v.a, i as f64);
        assert_eq!(v.b, -(i as f64));
    }

    for h in &handles {
        pool.recycle(*h).unwrap();
    }
    assert_eq!(pool.live_count(), 0);
    assert!(pool.capacity() >= pool.free_count());

    let free = pool.free_count();
    let again: Vec<_> = (0..free).map(|_| pool.acquire().unwrap()).collect();
    assert_eq!(again.len(), free);
    assert_eq!(pool.free_count(), 0);
    for h in &again {
        assert_eq!(*pool.value(*h).unwrap(), Pair::default());
    }
}

#[test]
fn batch_and_single_recycle_interleave() {
    let mut pool = ObjectPool::new(2, Pair::default);
    let a = pool.acquire().unwrap();
    let b = pool.acquire().unwrap();
    let c = pool.acquire().unwrap();

    pool.recycle(b).unwrap();
    assert!(matches!(
        pool.recycle_all(&[a, b, c]),
        Err(PoolError::DoubleRecycle { .. })
    ));
    pool.recycle_all(&[a, c]).unwrap();
    assert_eq!(pool.live_count(), 0);
}
