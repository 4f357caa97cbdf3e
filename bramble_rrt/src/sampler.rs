// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sources of candidate points for tree growth.

use kurbo::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces sample points inside the planning bounds.
pub trait Sampler {
    /// Draw the next sample inside `bounds`.
    fn sample(&mut self, bounds: Rect) -> Point;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, bounds: Rect) -> Point {
        (**self).sample(bounds)
    }
}

/// Uniform random sampling over the half-open bounds.
#[derive(Clone, Debug)]
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    /// Seeded from `seed` when given, otherwise from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_rng(StdRng::from_os_rng()),
        }
    }

    /// A reproducible sampler.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Wrap an existing generator.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Sampler for UniformSampler {
    fn sample(&mut self, bounds: Rect) -> Point {
        let tx: f64 = self.rng.random();
        let ty: f64 = self.rng.random();
        Point::new(
            bounds.x0 + tx * bounds.width(),
            bounds.y0 + ty * bounds.height(),
        )
    }
}

/// Replays a fixed list of points, cycling once exhausted.
///
/// Bounds are ignored. Useful for deterministic tests and for replaying a
/// recorded run.
#[derive(Clone, Debug)]
pub struct ScriptedSampler {
    points: Vec<Point>,
    next: usize,
}

impl ScriptedSampler {
    /// Create a sampler over `points`.
    ///
    /// Panics if `points` is empty.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        assert!(
            !points.is_empty(),
            "scripted sampler needs at least one point"
        );
        Self { points, next: 0 }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl Sampler for ScriptedSampler {
    fn sample(&mut self, _bounds: Rect) -> Point {
        let p = self.points[self.next % self.points.len()];
        self.next += 1;
        p
    }
}
