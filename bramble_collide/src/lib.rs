// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level collision tests for straight edges against segment obstacles.
//!
//! This crate provides the small, numerically careful predicates a 2D
//! sampling-based planner needs, built on top of [`kurbo`]. It is
//! intentionally decoupled from any particular tree or search strategy.
//!
//! # Typical usage
//!
//! - Collect the obstacle field once into an [`ObstacleSet`].
//! - For every candidate edge, call [`ObstacleSet::is_edge_blocked`]. The set
//!   culls obstacles by bounding box before running the exact test.
//! - Use [`segments_intersect`] directly when you need the raw predicate.
//!
//! # Intersection rule
//!
//! Two segments intersect when each one strictly straddles the line through
//! the other, or when an endpoint of one lies exactly on the other (touching
//! and collinear overlap both count). A zero-length segment intersects
//! nothing. The rule is symmetric in its arguments and never fails, whatever
//! the input geometry.
//!
//! ```rust
//! use bramble_collide::segments_intersect;
//! use kurbo::Line;
//!
//! let wall = Line::new((5.0, -5.0), (5.0, 5.0));
//! assert!(segments_intersect(Line::new((0.0, 0.0), (10.0, 0.0)), wall));
//! // Ending exactly on the wall still counts.
//! assert!(segments_intersect(Line::new((0.0, 0.0), (5.0, 0.0)), wall));
//! assert!(!segments_intersect(Line::new((0.0, 0.0), (4.0, 0.0)), wall));
//! ```

#![no_std]

extern crate alloc;

use kurbo::{Line, Point};

mod obstacle;

pub use obstacle::{Obstacle, ObstacleSet, is_edge_blocked};

/// Signed doubled area of the triangle `(p0, p1, p2)`.
///
/// Positive when `p2` lies to the left of the directed line `p0 → p1`
/// (counter-clockwise turn), negative to the right, zero when collinear.
#[inline]
pub fn cross(p0: Point, p1: Point, p2: Point) -> f64 {
    (p1 - p0).cross(p2 - p0)
}

/// Whether a segment has zero length.
#[inline]
pub fn is_degenerate(line: Line) -> bool {
    line.p0 == line.p1
}

/// Whether `p`, already known to be collinear with `seg`, lies within it.
#[inline]
fn within_bounds(seg: Line, p: Point) -> bool {
    let (min_x, max_x) = min_max(seg.p0.x, seg.p1.x);
    let (min_y, max_y) = min_max(seg.p0.y, seg.p1.y);
    min_x <= p.x && p.x <= max_x && min_y <= p.y && p.y <= max_y
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[inline]
fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Whether two segments intersect under the straddle rule.
///
/// See the crate documentation for the exact contract.
pub fn segments_intersect(a: Line, b: Line) -> bool {
    if is_degenerate(a) || is_degenerate(b) {
        return false;
    }

    let d1 = cross(b.p0, b.p1, a.p0);
    let d2 = cross(b.p0, b.p1, a.p1);
    let d3 = cross(a.p0, a.p1, b.p0);
    let d4 = cross(a.p0, a.p1, b.p1);

    if opposite_signs(d1, d2) && opposite_signs(d3, d4) {
        return true;
    }

    (d1 == 0.0 && within_bounds(b, a.p0))
        || (d2 == 0.0 && within_bounds(b, a.p1))
        || (d3 == 0.0 && within_bounds(a, b.p0))
        || (d4 == 0.0 && within_bounds(a, b.p1))
}
