// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types shared by the index and its backends.

/// Axis-aligned rectangle in 2D, used to size grids for a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2D {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (top)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (bottom)
    pub max_y: f64,
}

impl Aabb2D {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the AABB, zero if inverted.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    /// Height of the AABB, zero if inverted.
    #[inline]
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    /// Return true if the AABB is empty or inverted (no area). Assumes no NaN.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

/// Squared Euclidean distance between two points.
#[inline]
pub(crate) fn dist2(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

/// Running best candidate for a nearest-neighbor search.
///
/// Ties on distance go to the lowest slot, so every backend reports the
/// earliest inserted point among equally distant ones.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Nearest {
    best: Option<(f64, usize)>,
}

impl Nearest {
    #[inline]
    pub(crate) fn offer(&mut self, d2: f64, slot: usize) {
        match self.best {
            Some((bd, bs)) if d2 > bd || (d2 == bd && slot >= bs) => {}
            _ => self.best = Some((d2, slot)),
        }
    }

    #[inline]
    pub(crate) fn best_dist2(&self) -> Option<f64> {
        self.best.map(|(d2, _)| d2)
    }

    #[inline]
    pub(crate) fn slot(&self) -> Option<usize> {
        self.best.map(|(_, s)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::{Aabb2D, Nearest};

    #[test]
    fn aabb_extent_clamps_inverted() {
        let aabb = Aabb2D::new(5.0, 7.0, 10.0, 9.0);
        assert_eq!(aabb.width(), 5.0);
        assert_eq!(aabb.height(), 2.0);
        assert!(!aabb.is_empty());

        let inverted = Aabb2D::new(10.0, 0.0, 0.0, 10.0);
        assert!(inverted.is_empty());
        assert_eq!(inverted.width(), 0.0);
    }

    #[test]
    fn nearest_prefers_lower_slot_on_ties() {
        let mut n = Nearest::default();
        n.offer(4.0, 7);
        n.offer(4.0, 3);
        n.offer(4.0, 5);
        assert_eq!(n.slot(), Some(3));
        n.offer(1.0, 9);
        assert_eq!(n.slot(), Some(9));
        assert_eq!(n.best_dist2(), Some(1.0));
    }
}
