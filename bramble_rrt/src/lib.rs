// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble RRT: an incremental rapidly-exploring random tree planner for the plane.
//!
//! The planner searches for a collision-free polyline from a start point to a
//! goal point through a field of line-segment obstacles. It is built to be
//! driven from a frame loop: every [`Planner::step`] performs a small bounded
//! batch of work and returns, so a caller can draw the growing tree between
//! steps.
//!
//! - [`Tree`] owns the nodes in an arena with write-once parent links, mirrored
//!   into a [`bramble_index`] grid for nearest-neighbor queries.
//! - Edges are checked against obstacles with [`bramble_collide`]; an edge that
//!   touches an obstacle counts as blocked.
//! - [`Sampler`] abstracts the random source. [`UniformSampler`] is the default;
//!   [`ScriptedSampler`] replays fixed points.
//! - [`Scenario::random`] generates an obstacle field of snapped, axis-aligned
//!   walls for demos and benchmarks.
//!
//! The planner looks for *a* feasible path, not a short one, and performs no
//! smoothing. Obstacles are fixed for the duration of a run.
//!
//! # Example
//!
//! ```rust
//! use bramble_collide::{Obstacle, ObstacleSet};
//! use bramble_rrt::{Planner, PlannerConfig, PlannerEvent, PlannerState};
//! use kurbo::{Point, Rect};
//!
//! let config = PlannerConfig::default()
//!     .with_bounds(Rect::new(0.0, 0.0, 200.0, 200.0))
//!     .with_seed(42);
//! let mut planner = Planner::new(config).unwrap();
//!
//! let obstacles: ObstacleSet = [Obstacle::new((100.0, 20.0), (100.0, 180.0))]
//!     .into_iter()
//!     .collect();
//! planner.initialize(Point::new(20.0, 100.0), Point::new(180.0, 100.0), obstacles);
//!
//! let mut edges = 0;
//! while !planner.state().is_terminal() {
//!     planner.step_with(|event| {
//!         if let PlannerEvent::EdgeAdded { .. } = event {
//!             edges += 1;
//!         }
//!     });
//! }
//!
//! if planner.state() == PlannerState::Solved {
//!     let path = planner.path().unwrap();
//!     assert_eq!(path.goal(), Point::new(180.0, 100.0));
//!     assert_eq!(path.start(), Point::new(20.0, 100.0));
//! }
//! assert_eq!(edges + 1, planner.size());
//! ```
//!
//! ## Logging
//!
//! Run transitions are logged at `debug` level and per-sample decisions at
//! `trace` level through the [`log`] facade. No logger is installed.

mod config;
mod error;
mod path;
mod planner;
mod sampler;
mod scenario;
mod tree;

pub use config::{
    DEFAULT_BATCH_SIZE_CAP, DEFAULT_BOUNDS, DEFAULT_MAX_TREE_SIZE, PlannerConfig, ScenarioConfig,
};
pub use error::{ConfigError, PlanError, TreeError};
pub use path::Path;
pub use planner::{Planner, PlannerEvent, PlannerState, PlannerStats};
pub use sampler::{Sampler, ScriptedSampler, UniformSampler};
pub use scenario::Scenario;
pub use tree::{Ancestors, NodeId, Tree, TreeNode};
