// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planning problems: start, goal, and an obstacle field.

use bramble_collide::{Obstacle, ObstacleSet};
use kurbo::{Point, Rect};
use rand::Rng;

use crate::config::ScenarioConfig;
use crate::error::ConfigError;

/// A planning problem.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Region the problem lives in.
    pub bounds: Rect,
    /// Tree root.
    pub start: Point,
    /// Point the tree must connect to.
    pub goal: Point,
    /// Fixed obstacle field.
    pub obstacles: ObstacleSet,
}

impl Scenario {
    /// Assemble a scenario from its parts.
    pub fn new(
        bounds: Rect,
        start: Point,
        goal: Point,
        obstacles: impl IntoIterator<Item = Obstacle>,
    ) -> Self {
        Self {
            bounds,
            start,
            goal,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Generate a random scenario.
    ///
    /// Start and goal are uniform in the bounds. Each obstacle is an
    /// axis-aligned segment, randomly vertical or horizontal, whose endpoints
    /// sit on multiples of `snap_unit` measured from the bounds' corner.
    /// Nothing prevents an obstacle from being degenerate or the goal from
    /// being unreachable.
    ///
    /// Fails if `config` does not validate; nothing is drawn from `rng` then.
    pub fn random<R: Rng + ?Sized>(
        config: &ScenarioConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.bounds;
        let start = uniform_point(bounds, rng);

        let unit = config.snap_unit;
        let mut obstacles = ObstacleSet::new();
        for _ in 0..config.obstacle_count {
            let x = snapped(rng, bounds.x0, bounds.width(), unit);
            let y = snapped(rng, bounds.y0, bounds.height(), unit);
            let end = if rng.random_bool(0.5) {
                Point::new(x, snapped(rng, bounds.y0, bounds.height(), unit))
            } else {
                Point::new(snapped(rng, bounds.x0, bounds.width(), unit), y)
            };
            obstacles.extend([Obstacle::new((x, y), end)]);
        }

        let goal = uniform_point(bounds, rng);
        Ok(Self {
            bounds,
            start,
            goal,
            obstacles,
        })
    }

    /// Whether the straight start-to-goal edge is free.
    pub fn is_trivial(&self) -> bool {
        !self.obstacles.is_edge_blocked(self.start, self.goal)
    }
}

fn uniform_point<R: Rng + ?Sized>(bounds: Rect, rng: &mut R) -> Point {
    let tx: f64 = rng.random();
    let ty: f64 = rng.random();
    Point::new(
        bounds.x0 + tx * bounds.width(),
        bounds.y0 + ty * bounds.height(),
    )
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Step counts are small, non-negative, and floored before the cast."
)]
fn snapped<R: Rng + ?Sized>(rng: &mut R, origin: f64, extent: f64, unit: f64) -> f64 {
    let steps = (extent / unit).floor().max(0.0) as u64;
    origin + rng.random_range(0..=steps) as f64 * unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_scenario_respects_config() {
        let config = ScenarioConfig::default();
        let mut rng = StdRng::seed_from_u64(2025);
        for _ in 0..20 {
            let s = Scenario::random(&config, &mut rng).unwrap();
            assert_eq!(s.obstacles.len(), 10);
            assert!(s.bounds.contains(s.start), "start {:?}", s.start);
            assert!(s.bounds.contains(s.goal), "goal {:?}", s.goal);
            for o in &s.obstacles {
                let line = o.line();
                assert!(
                    line.p0.x == line.p1.x || line.p0.y == line.p1.y,
                    "{line:?} is not axis-aligned"
                );
                for p in [line.p0, line.p1] {
                    assert_eq!(p.x % 25.0, 0.0, "{p:?} off the snap grid");
                    assert_eq!(p.y % 25.0, 0.0, "{p:?} off the snap grid");
                    assert!(
                        (0.0..=800.0).contains(&p.x) && (0.0..=600.0).contains(&p.y),
                        "{p:?} outside the bounds"
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_same_scenario() {
        let config = ScenarioConfig::default().with_obstacle_count(4);
        let a = Scenario::random(&config, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = Scenario::random(&config, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a.start, b.start);
        assert_eq!(a.goal, b.goal);
        assert!(a.obstacles.iter().eq(b.obstacles.iter()));
    }

    #[test]
    fn rejects_unusable_snap_unit() {
        let mut rng = StdRng::seed_from_u64(9);
        for unit in [0.0, -25.0, f64::NAN, f64::INFINITY] {
            let config = ScenarioConfig::default().with_snap_unit(unit);
            assert!(
                matches!(
                    Scenario::random(&config, &mut rng),
                    Err(ConfigError::InvalidSnapUnit(_))
                ),
                "snap unit {unit} was accepted"
            );
        }
        let flat = Rect::new(0.0, 0.0, 800.0, 0.0);
        assert_eq!(
            Scenario::random(&ScenarioConfig::default().with_bounds(flat), &mut rng).unwrap_err(),
            ConfigError::InvalidBounds(flat)
        );

        // A rejected config leaves the stream untouched.
        let after_errors = Scenario::random(&ScenarioConfig::default(), &mut rng).unwrap();
        let fresh =
            Scenario::random(&ScenarioConfig::default(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(after_errors.start, fresh.start);
    }

    #[test]
    fn trivial_when_unobstructed() {
        let s = Scenario::new(
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            [],
        );
        assert!(s.is_trivial());
        let walled = Scenario::new(
            s.bounds,
            s.start,
            s.goal,
            [Obstacle::new((5.0, -5.0), (5.0, 5.0))],
        );
        assert!(!walled.is_trivial());
    }
}
