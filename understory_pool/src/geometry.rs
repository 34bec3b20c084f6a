// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Poolable` for Kurbo's plain value types.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::Poolable;

impl Poolable for Point {
    fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

impl Poolable for Vec2 {
    fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

impl Poolable for Size {
    fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

impl Poolable for Rect {
    fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

impl Poolable for Affine {
    fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point};

    use crate::ObjectPool;

    #[test]
    fn recycled_affine_is_identity() {
        let mut pool = ObjectPool::new(1, || Affine::IDENTITY);
        let h = pool.acquire().unwrap();
        *pool.value_mut(h).unwrap() = Affine::scale(3.0);
        pool.recycle(h).unwrap();

        let h = pool.acquire().unwrap();
        assert_eq!(*pool.value(h).unwrap(), Affine::IDENTITY);
    }

    #[test]
    fn recycled_point_is_origin() {
        let mut pool = ObjectPool::new(1, || Point::ZERO);
        let h = pool.acquire().unwrap();
        *pool.value_mut(h).unwrap() = Point::new(4.0, -2.0);
        pool.recycle(h).unwrap();

        let h = pool.acquire().unwrap();
        assert_eq!(*pool.value(h).unwrap(), Point::ZERO);
    }
}
