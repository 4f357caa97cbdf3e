// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Obstacle segments and the edge collision detector.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::{is_degenerate, segments_intersect};

/// A line-segment obstacle with its cached bounding box.
///
/// The bounding box is inclusive: a segment lying on its edge still overlaps
/// it, so axis-aligned walls have zero-width boxes that nonetheless cull
/// correctly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    line: Line,
    bounds: Rect,
}

impl Obstacle {
    /// Create an obstacle from its two endpoints.
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self::from(Line::new(p0, p1))
    }

    /// The obstacle segment.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Inclusive bounding box of the segment.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the obstacle has zero length. Degenerate obstacles block nothing.
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.line)
    }

    /// Whether the edge `p1 → p2` intersects this obstacle.
    #[inline]
    pub fn blocks(&self, p1: Point, p2: Point) -> bool {
        overlaps_inclusive(self.bounds, Rect::from_points(p1, p2))
            && segments_intersect(Line::new(p1, p2), self.line)
    }
}

impl From<Line> for Obstacle {
    fn from(line: Line) -> Self {
        Self {
            line,
            bounds: Rect::from_points(line.p0, line.p1),
        }
    }
}

#[inline]
fn overlaps_inclusive(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

/// Whether the edge `p1 → p2` intersects any of `obstacles`.
///
/// Linear in the number of obstacles and allocation-free.
pub fn is_edge_blocked(p1: Point, p2: Point, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| o.blocks(p1, p2))
}

/// A fixed, ordered obstacle field.
///
/// Holds the union bounding box of all obstacles so that edges entirely
/// outside the field are accepted without touching individual segments.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    bounds: Option<Rect>,
}

impl ObstacleSet {
    /// Create an empty obstacle set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of obstacles.
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the set has no obstacles.
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Union bounding box of all obstacles, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The obstacle at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    /// Iterate over the obstacles in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    /// Borrow the obstacles as a slice.
    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Whether the edge `p1 → p2` intersects any obstacle.
    pub fn is_edge_blocked(&self, p1: Point, p2: Point) -> bool {
        self.first_blocking(p1, p2).is_some()
    }

    /// Index of the first obstacle (in insertion order) blocking `p1 → p2`.
    pub fn first_blocking(&self, p1: Point, p2: Point) -> Option<usize> {
        let field = self.bounds?;
        if !overlaps_inclusive(field, Rect::from_points(p1, p2)) {
            return None;
        }
        self.obstacles.iter().position(|o| o.blocks(p1, p2))
    }

    fn push(&mut self, obstacle: Obstacle) {
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(obstacle.bounds),
            None => obstacle.bounds,
        });
        self.obstacles.push(obstacle);
    }
}

impl FromIterator<Obstacle> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        let mut set = Self::new();
        for o in iter {
            set.push(o);
        }
        set
    }
}

impl FromIterator<Line> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        iter.into_iter().map(Obstacle::from).collect()
    }
}

impl Extend<Obstacle> for ObstacleSet {
    fn extend<I: IntoIterator<Item = Obstacle>>(&mut self, iter: I) {
        for o in iter {
            self.push(o);
        }
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Obstacle;
    type IntoIter = core::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
