// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input generators for the Bramble benchmarks.

use kurbo::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `count` points spread uniformly over `width` x `height`, reproducible from `seed`.
pub fn uniform_points(seed: u64, count: usize, width: f64, height: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)))
        .collect()
}

/// `count` points packed around a few cluster centers, reproducible from `seed`.
///
/// Exercises the grid's ring search when most cells are empty.
pub fn clustered_points(seed: u64, count: usize, width: f64, height: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers: Vec<Point> = (0..4)
        .map(|_| Point::new(rng.random_range(0.0..width), rng.random_range(0.0..height)))
        .collect();
    (0..count)
        .map(|i| {
            let c = centers[i % centers.len()];
            Point::new(
                (c.x + rng.random_range(-20.0..20.0)).clamp(0.0, width),
                (c.y + rng.random_range(-20.0..20.0)).clamp(0.0, height),
            )
        })
        .collect()
}
