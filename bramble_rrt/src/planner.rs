// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The incremental RRT planner.

use bramble_collide::ObstacleSet;
use bramble_index::Backend;
use bramble_index::backends::Grid;
use kurbo::Point;
use log::{debug, trace};

use crate::config::PlannerConfig;
use crate::error::{ConfigError, PlanError};
use crate::path::Path;
use crate::sampler::{Sampler, UniformSampler};
use crate::scenario::Scenario;
use crate::tree::{NodeId, Tree};

/// Nodes reserved up front when a run starts; the arena grows past this on demand.
const INITIAL_RESERVE: usize = 4096;

/// Lifecycle of a planning run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlannerState {
    /// No run has been started.
    Uninitialized,
    /// The tree is growing.
    Running,
    /// The tree reached the goal; a path is available.
    Solved,
    /// The node cap was reached without reaching the goal.
    Exhausted,
}

impl PlannerState {
    /// Whether further steps can change anything.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Progress reported by [`Planner::step_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlannerEvent {
    /// A node was added to the tree.
    EdgeAdded {
        /// Parent position.
        from: Point,
        /// Position of the new node.
        to: Point,
        /// The new node.
        node: NodeId,
    },
    /// The run connected to the goal.
    Solved,
    /// The run hit the node cap.
    Exhausted,
}

/// Counters for the current run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlannerStats {
    /// Calls to `step` that did work.
    pub steps: u64,
    /// Samples drawn.
    pub samples: u64,
    /// Samples discarded because the edge from their nearest node was blocked.
    pub rejected: u64,
    /// Nodes added, root excluded.
    pub inserted: u64,
}

/// Rapidly-exploring random tree planner, driven in small bounded steps.
///
/// A run starts with [`Planner::initialize`], which roots the tree at the
/// start point and solves immediately if the straight start-to-goal edge is
/// free. Each [`Planner::step`] then makes up to [`Planner::batch_size`]
/// sampling attempts: draw a point, find the nearest tree node, and if the edge
/// between them crosses no obstacle, add the point as that node's child. A run
/// ends as [`PlannerState::Solved`] once a new node sees the goal, or as
/// [`PlannerState::Exhausted`] once the tree reaches `max_tree_size` nodes.
///
/// `S` is the sample source and `B` the nearest-neighbor backend.
///
/// ## Example
///
/// ```rust
/// use bramble_collide::{Obstacle, ObstacleSet};
/// use bramble_rrt::{Planner, PlannerConfig, PlannerState};
/// use kurbo::{Point, Rect};
///
/// let config = PlannerConfig::default()
///     .with_bounds(Rect::new(-20.0, -20.0, 30.0, 20.0))
///     .with_seed(1);
/// let mut planner = Planner::new(config).unwrap();
///
/// let wall: ObstacleSet = [Obstacle::new((5.0, -5.0), (5.0, 5.0))].into_iter().collect();
/// planner.initialize(Point::new(0.0, 0.0), Point::new(10.0, 0.0), wall);
/// assert_eq!(planner.state(), PlannerState::Running);
///
/// // Normally called once per frame.
/// let state = planner.run_to_completion(10_000);
/// assert!(state.is_terminal());
/// ```
pub struct Planner<S: Sampler = UniformSampler, B: Backend = Grid> {
    config: PlannerConfig,
    sampler: S,
    tree: Tree<B>,
    start: Point,
    goal: Point,
    obstacles: ObstacleSet,
    state: PlannerState,
    path: Option<Path>,
    stats: PlannerStats,
}

impl<S, B> core::fmt::Debug for Planner<S, B>
where
    S: Sampler + core::fmt::Debug,
    B: Backend + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Planner")
            .field("state", &self.state)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("obstacles", &self.obstacles.len())
            .field("tree", &self.tree)
            .field("stats", &self.stats)
            .field("sampler", &self.sampler)
            .finish_non_exhaustive()
    }
}

impl Planner {
    /// Create a planner with the uniform sampler and grid index.
    ///
    /// The sampler is seeded from `config.seed`, or from the operating system.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        let sampler = UniformSampler::new(config.seed);
        Self::with_sampler(config, sampler)
    }
}

impl<S: Sampler> Planner<S> {
    /// Create a grid-indexed planner drawing samples from `sampler`.
    pub fn with_sampler(config: PlannerConfig, sampler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::with_origin(config.grid_cell_size(), config.bounds.x0, config.bounds.y0);
        Ok(Self::from_parts(config, sampler, grid))
    }
}

impl<S: Sampler, B: Backend> Planner<S, B> {
    /// Create a planner over an explicit index backend.
    pub fn with_backend(config: PlannerConfig, sampler: S, backend: B) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, sampler, backend))
    }

    fn from_parts(config: PlannerConfig, sampler: S, backend: B) -> Self {
        Self {
            config,
            sampler,
            tree: Tree::with_backend(backend),
            start: Point::ORIGIN,
            goal: Point::ORIGIN,
            obstacles: ObstacleSet::new(),
            state: PlannerState::Uninitialized,
            path: None,
            stats: PlannerStats::default(),
        }
    }

    /// Start a new run, discarding everything from the previous one.
    ///
    /// The tree is rooted at `start`. If the straight edge to `goal` is free
    /// the run is solved at once with the path `[goal, start]`; otherwise it
    /// is running. Inputs are taken as given: `start == goal` solves trivially.
    pub fn initialize(&mut self, start: Point, goal: Point, obstacles: ObstacleSet) {
        self.tree.clear();
        self.tree
            .reserve(self.config.max_tree_size.min(INITIAL_RESERVE));
        self.path = None;
        self.stats = PlannerStats::default();
        self.start = start;
        self.goal = goal;
        self.obstacles = obstacles;

        let _root = self.tree.insert(start, None);
        if self.obstacles.is_edge_blocked(start, goal) {
            self.state = PlannerState::Running;
            debug!(
                "rrt: running from {start:?} to {goal:?} around {} obstacles",
                self.obstacles.len()
            );
        } else {
            self.path = Some(Path::from_goal_first(vec![goal, start]));
            self.state = PlannerState::Solved;
            debug!("rrt: solved directly from {start:?} to {goal:?}");
        }
    }

    /// Start a new run on `scenario`.
    pub fn initialize_scenario(&mut self, scenario: &Scenario) {
        self.initialize(scenario.start, scenario.goal, scenario.obstacles.clone());
    }

    /// Number of sampling attempts the next step will make.
    ///
    /// Grows by one per hundred nodes, up to `batch_size_cap`.
    pub fn batch_size(&self) -> usize {
        self.tree
            .len()
            .div_ceil(100)
            .clamp(1, self.config.batch_size_cap)
    }

    /// Advance the run by one bounded batch of sampling attempts.
    ///
    /// A no-op in a terminal state. Panics if the planner was never initialized.
    pub fn step(&mut self) -> PlannerState {
        self.step_with(|_| {})
    }

    /// Like [`Planner::step`], but reports an uninitialized planner as an error.
    pub fn try_step(&mut self) -> Result<PlannerState, PlanError> {
        if self.state == PlannerState::Uninitialized {
            return Err(PlanError::NotInitialized);
        }
        Ok(self.step())
    }

    /// Like [`Planner::step`], reporting every added edge and any terminal
    /// transition to `on_event` as it happens.
    pub fn step_with<F: FnMut(PlannerEvent)>(&mut self, mut on_event: F) -> PlannerState {
        match self.state {
            PlannerState::Uninitialized => {
                panic!("planner invariant violated: step called before initialize")
            }
            PlannerState::Solved | PlannerState::Exhausted => return self.state,
            PlannerState::Running => {}
        }

        self.stats.steps += 1;
        for _ in 0..self.batch_size() {
            if self.tree.len() >= self.config.max_tree_size {
                self.state = PlannerState::Exhausted;
                debug!(
                    "rrt: exhausted at {} nodes after {} samples",
                    self.tree.len(),
                    self.stats.samples
                );
                on_event(PlannerEvent::Exhausted);
                break;
            }

            let sample = self.sampler.sample(self.config.bounds);
            self.stats.samples += 1;

            let nearest = self
                .tree
                .nearest(sample)
                .expect("planner invariant violated: tree has no root");
            let from = self.tree.expect_position(nearest);

            if let Some(obstacle) = self.obstacles.first_blocking(from, sample) {
                self.stats.rejected += 1;
                trace!("rrt: {from:?} -> {sample:?} blocked by obstacle {obstacle}");
                continue;
            }

            let node = self.tree.insert(sample, Some(nearest));
            self.stats.inserted += 1;
            trace!("rrt: {node:?} at {sample:?} under {nearest:?}");
            on_event(PlannerEvent::EdgeAdded {
                from,
                to: sample,
                node,
            });

            if !self.obstacles.is_edge_blocked(sample, self.goal) {
                let path = self.trace_path(node);
                debug!(
                    "rrt: solved at {} nodes, path of {} points, length {:.1}",
                    self.tree.len(),
                    path.len(),
                    path.length()
                );
                self.path = Some(path);
                self.state = PlannerState::Solved;
                on_event(PlannerEvent::Solved);
                break;
            }
        }
        self.state
    }

    /// Step until the run ends or `max_steps` steps have been taken.
    pub fn run_to_completion(&mut self, max_steps: usize) -> PlannerState {
        for _ in 0..max_steps {
            if self.step().is_terminal() {
                break;
            }
        }
        self.state
    }

    fn trace_path(&self, node: NodeId) -> Path {
        let mut points = Vec::with_capacity(self.tree.depth(node).map_or(0, |d| d as usize + 2));
        points.push(self.goal);
        points.extend(
            self.tree
                .ancestors(node)
                .map(|id| self.tree.expect_position(id)),
        );
        Path::from_goal_first(points)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlannerState {
        self.state
    }

    /// Number of tree nodes, root included.
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// The path, once solved.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// The search tree.
    pub fn tree(&self) -> &Tree<B> {
        &self.tree
    }

    /// Start point of the current run.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal point of the current run.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Obstacles of the current run.
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// The configuration this planner was built with.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Counters for the current run.
    pub fn stats(&self) -> PlannerStats {
        self.stats
    }

    /// Borrow the sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}
