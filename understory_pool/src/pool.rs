// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::PoolError;
use crate::handle::{PoolHandle, PoolId};

/// Replenish percentage used by [`ObjectPool::new`]: refill the whole capacity.
pub const DEFAULT_REPLENISH_PERCENTAGE: f64 = 1.0;

/// A value that can be stored in an [`ObjectPool`].
///
/// Pooled values are plain data. [`Poolable::reset`] returns a value to its
/// freshly constructed state when it re-enters the pool, so nothing carries
/// over from one borrow to the next.
pub trait Poolable {
    /// Resets the value before it is returned to the free list.
    fn reset(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotState {
    /// On the free list.
    Free,
    /// Handed out by `acquire`.
    Live,
    /// Validated by an in-flight `recycle_all`.
    Pending,
}

#[derive(Debug)]
struct Slot<T> {
    value: T,
    generation: u32,
    state: SlotState,
}

/// Growable pool of reusable values addressed through [`PoolHandle`]s.
///
/// The pool owns every value it ever created. Values are never dropped while
/// the pool is alive; [`ObjectPool::recycle`] only moves a slot back onto the
/// free list. The free list starts with room for `capacity` entries and
/// doubles whenever recycling would overflow it.
///
/// When the free list is empty, [`ObjectPool::acquire`] creates
/// `capacity * replenish_percentage` new values (at least one, at most
/// `capacity`). This refill is lazy: steady-state use costs nothing, but a
/// burst that drains the pool pays for the refill on the call that finds it
/// empty.
#[derive(Debug)]
pub struct ObjectPool<T> {
    id: PoolId,
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    capacity: usize,
    replenish_percentage: f64,
    factory: fn() -> T,
}

impl<T: Poolable> ObjectPool<T> {
    /// Creates a pool of `capacity` values produced by `factory`.
    ///
    /// A `capacity` of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize, factory: fn() -> T) -> Self {
        Self::with_replenish_percentage(capacity, DEFAULT_REPLENISH_PERCENTAGE, factory)
    }

    /// Creates a pool that pre-fills and refills `capacity * percentage` values.
    ///
    /// `percentage` is clamped to `[0, 1]`. A percentage of zero still
    /// pre-fills one value but never refills; [`ObjectPool::acquire`] then
    /// reports [`PoolError::Exhausted`] once the pool runs dry.
    #[must_use]
    pub fn with_replenish_percentage(capacity: usize, percentage: f64, factory: fn() -> T) -> Self {
        let capacity = capacity.max(1);
        let mut pool = Self {
            id: PoolId::next(),
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            capacity,
            replenish_percentage: normalize_percentage(percentage),
            factory,
        };
        pool.replenish();
        pool
    }

    /// This pool's identity, as recorded in the handles it issues.
    #[must_use]
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Current size of the free list storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values ready to be acquired without refilling.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Number of values currently handed out.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Fraction of the capacity created when an empty pool is refilled.
    #[must_use]
    pub fn replenish_percentage(&self) -> f64 {
        self.replenish_percentage
    }

    /// Sets the refill fraction, clamped to `[0, 1]`.
    pub fn set_replenish_percentage(&mut self, percentage: f64) {
        self.replenish_percentage = normalize_percentage(percentage);
    }

    /// Takes an unowned value out of the pool.
    ///
    /// Refills the pool first if it is empty and the replenish percentage is
    /// non-zero.
    #[doc(alias = "get")]
    pub fn acquire(&mut self) -> Result<PoolHandle<T>, PoolError> {
        if self.free.is_empty() && self.replenish_percentage > 0.0 {
            self.replenish();
        }
        let index = self.free.pop().ok_or(PoolError::Exhausted { pool: self.id })?;
        let slot = &mut self.slots[index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        slot.state = SlotState::Live;
        Ok(PoolHandle::new(self.id, index, slot.generation))
    }

    /// Returns a value to the pool.
    ///
    /// Fails without touching the pool if the handle was issued by another
    /// pool, was already recycled, or refers to a slot that has been handed
    /// out again since.
    pub fn recycle(&mut self, handle: PoolHandle<T>) -> Result<(), PoolError> {
        let index = self.check_live(handle)?;
        self.ensure_free_capacity(self.free.len() + 1);
        self.release(index);
        Ok(())
    }

    /// Returns a batch of values to the pool.
    ///
    /// Every handle is validated before any is released, including duplicates
    /// within the batch, so a failing batch leaves the pool unchanged. The free
    /// list grows at most once.
    pub fn recycle_all(&mut self, handles: &[PoolHandle<T>]) -> Result<(), PoolError> {
        for (checked, handle) in handles.iter().enumerate() {
            match self.check_live(*handle) {
                Ok(index) => self.slots[index].state = SlotState::Pending,
                Err(err) => {
                    for earlier in &handles[..checked] {
                        self.slots[earlier.index()].state = SlotState::Live;
                    }
                    return Err(err);
                }
            }
        }
        self.ensure_free_capacity(self.free.len() + handles.len());
        for handle in handles {
            self.release(handle.index());
        }
        Ok(())
    }

    /// Borrows the value behind a live handle.
    pub fn value(&self, handle: PoolHandle<T>) -> Result<&T, PoolError> {
        let index = self.check_live(handle)?;
        Ok(&self.slots[index].value)
    }

    /// Mutably borrows the value behind a live handle.
    pub fn value_mut(&mut self, handle: PoolHandle<T>) -> Result<&mut T, PoolError> {
        let index = self.check_live(handle)?;
        Ok(&mut self.slots[index].value)
    }

    fn check_live(&self, handle: PoolHandle<T>) -> Result<usize, PoolError> {
        if handle.pool() != self.id {
            return Err(PoolError::ForeignPool {
                handle_pool: handle.pool(),
                pool: self.id,
            });
        }
        let index = handle.index();
        let slot = self
            .slots
            .get(index)
            .ok_or(PoolError::StaleHandle { pool: self.id })?;
        if slot.generation != handle.generation() {
            return Err(PoolError::StaleHandle { pool: self.id });
        }
        match slot.state {
            SlotState::Live => Ok(index),
            SlotState::Free | SlotState::Pending => Err(PoolError::DoubleRecycle { pool: self.id }),
        }
    }

    fn release(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.value.reset();
        slot.state = SlotState::Free;
        #[expect(clippy::cast_possible_truncation, reason = "index originated as a u32")]
        self.free.push(index as u32);
    }

    fn ensure_free_capacity(&mut self, needed: usize) {
        if needed <= self.capacity {
            return;
        }
        let mut capacity = self.capacity;
        while capacity < needed {
            capacity = capacity.saturating_mul(2);
        }
        log::debug!("{} growing free list {} -> {}", self.id, self.capacity, capacity);
        self.capacity = capacity;
        self.free.reserve(capacity - self.free.len());
    }

    fn replenish(&mut self) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "portion is clamped into 1..=capacity right after"
        )]
        let portion = (self.capacity as f64 * self.replenish_percentage) as usize;
        let portion = portion.clamp(1, self.capacity);
        let mut created = 0;
        for _ in 0..portion {
            let Ok(index) = u32::try_from(self.slots.len()) else {
                break;
            };
            self.slots.push(Slot {
                value: (self.factory)(),
                generation: 0,
                state: SlotState::Free,
            });
            self.free.push(index);
            created += 1;
        }
        log::debug!("{} replenished with {} values", self.id, created);
    }
}

fn normalize_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 1.0)
    }
}
