// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path reported by a solved run.

use kurbo::{Line, Point};

/// A feasible path, stored goal first.
///
/// Always holds at least two points: the goal and the start. Consecutive
/// points are tree edges (or the final connection to the goal), none of which
/// crosses an obstacle.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub(crate) fn from_goal_first(points: Vec<Point>) -> Self {
        assert!(points.len() >= 2, "path invariant violated: fewer than two points");
        Self { points }
    }

    /// Points from the goal to the start.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, goal and start included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a path has at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The goal point, first in the path.
    pub fn goal(&self) -> Point {
        self.points[0]
    }

    /// The start point, last in the path.
    pub fn start(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Straight segments between consecutive points, goal first.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Total Euclidean length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// The points reordered from the start to the goal.
    pub fn to_start_first(&self) -> Vec<Point> {
        self.points.iter().rev().copied().collect()
    }
}
