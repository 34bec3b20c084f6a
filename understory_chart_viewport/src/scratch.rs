// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use understory_pool::{ObjectPool, PoolError, PoolHandle};

/// Reusable storage for the geometry a renderer produces every frame.
///
/// Each kind of value lives in its own [`ObjectPool`], so a renderer can
/// stash intermediate points, rectangles, and matrices without allocating
/// once the pools have warmed up.
#[derive(Debug)]
pub struct GeometryScratch {
    points: ObjectPool<Point>,
    rects: ObjectPool<Rect>,
    transforms: ObjectPool<Affine>,
}

impl GeometryScratch {
    /// Creates scratch pools that each start with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            points: ObjectPool::new(capacity, || Point::ZERO),
            rects: ObjectPool::new(capacity, || Rect::ZERO),
            transforms: ObjectPool::new(capacity, || Affine::IDENTITY),
        }
    }

    /// The point pool.
    #[must_use]
    pub fn points(&self) -> &ObjectPool<Point> {
        &self.points
    }

    /// The rectangle pool.
    #[must_use]
    pub fn rects(&self) -> &ObjectPool<Rect> {
        &self.rects
    }

    /// The transform pool.
    #[must_use]
    pub fn transforms(&self) -> &ObjectPool<Affine> {
        &self.transforms
    }

    /// Stores `pt` in a pooled slot.
    pub fn store_point(&mut self, pt: Point) -> Result<PoolHandle<Point>, PoolError> {
        store(&mut self.points, pt)
    }

    /// Stores `rect` in a pooled slot.
    pub fn store_rect(&mut self, rect: Rect) -> Result<PoolHandle<Rect>, PoolError> {
        store(&mut self.rects, rect)
    }

    /// Stores `transform` in a pooled slot.
    pub fn store_transform(&mut self, transform: Affine) -> Result<PoolHandle<Affine>, PoolError> {
        store(&mut self.transforms, transform)
    }

    /// Reads a pooled point.
    pub fn point(&self, handle: PoolHandle<Point>) -> Result<Point, PoolError> {
        self.points.value(handle).copied()
    }

    /// Reads a pooled rectangle.
    pub fn rect(&self, handle: PoolHandle<Rect>) -> Result<Rect, PoolError> {
        self.rects.value(handle).copied()
    }

    /// Reads a pooled transform.
    pub fn transform(&self, handle: PoolHandle<Affine>) -> Result<Affine, PoolError> {
        self.transforms.value(handle).copied()
    }

    /// Returns a point slot to its pool.
    pub fn release_point(&mut self, handle: PoolHandle<Point>) -> Result<(), PoolError> {
        self.points.recycle(handle)
    }

    /// Returns a rectangle slot to its pool.
    pub fn release_rect(&mut self, handle: PoolHandle<Rect>) -> Result<(), PoolError> {
        self.rects.recycle(handle)
    }

    /// Returns a transform slot to its pool.
    pub fn release_transform(&mut self, handle: PoolHandle<Affine>) -> Result<(), PoolError> {
        self.transforms.recycle(handle)
    }

    /// Returns a batch of point slots to their pool.
    pub fn release_points(&mut self, handles: &[PoolHandle<Point>]) -> Result<(), PoolError> {
        self.points.recycle_all(handles)
    }
}

impl Default for GeometryScratch {
    fn default() -> Self {
        Self::new(16)
    }
}

fn store<T: understory_pool::Poolable>(
    pool: &mut ObjectPool<T>,
    value: T,
) -> Result<PoolHandle<T>, PoolError> {
    let handle = pool.acquire()?;
    *pool.value_mut(handle)? = value;
    Ok(handle)
}
