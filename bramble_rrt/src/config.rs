// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planner and scenario configuration.

use bramble_index::suggested_cell_size;
use kurbo::Rect;

use crate::error::ConfigError;
use crate::tree::NodeId;

/// Default cap on tree node count, root included.
pub const DEFAULT_MAX_TREE_SIZE: usize = 3000;

/// Default upper bound on sampling attempts per step.
pub const DEFAULT_BATCH_SIZE_CAP: usize = 8;

/// Default planning region.
pub const DEFAULT_BOUNDS: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

// Past this many nodes the derived grid stops shrinking its cells, so a
// sparse early tree in a huge-cap run does not scan millions of empty cells.
const GRID_SIZING_LIMIT: usize = 1 << 16;

/// Configuration for a [`Planner`][crate::Planner].
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Cap on the number of tree nodes. Reaching it exhausts the run.
    /// Default: 3000
    pub max_tree_size: usize,

    /// Upper bound on the adaptive per-step sample count.
    /// Default: 8
    pub batch_size_cap: usize,

    /// Region samples are drawn from. Normally the obstacle field's extent.
    /// Default: 800 x 600 at the origin
    pub bounds: Rect,

    /// Seed for the default sampler. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Grid cell edge for the nearest-neighbor index.
    /// `None` derives it from `bounds` and `max_tree_size`.
    pub cell_size: Option<f64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_tree_size: DEFAULT_MAX_TREE_SIZE,
            batch_size_cap: DEFAULT_BATCH_SIZE_CAP,
            bounds: DEFAULT_BOUNDS,
            seed: None,
            cell_size: None,
        }
    }
}

impl PlannerConfig {
    /// Set the node cap.
    pub fn with_max_tree_size(mut self, max_tree_size: usize) -> Self {
        self.max_tree_size = max_tree_size;
        self
    }

    /// Set the per-step sample cap.
    pub fn with_batch_size_cap(mut self, batch_size_cap: usize) -> Self {
        self.batch_size_cap = batch_size_cap;
        self
    }

    /// Set the sampling region.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Seed the default sampler for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the grid cell edge.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = Some(cell_size);
        self
    }

    /// Cell edge the planner's grid index will use.
    pub fn grid_cell_size(&self) -> f64 {
        self.cell_size.unwrap_or_else(|| {
            suggested_cell_size(
                self.bounds.width(),
                self.bounds.height(),
                self.max_tree_size.min(GRID_SIZING_LIMIT),
            )
        })
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tree_size == 0 {
            return Err(ConfigError::ZeroTreeSize);
        }
        if self.max_tree_size > NodeId::LIMIT {
            return Err(ConfigError::TreeSizeTooLarge(self.max_tree_size));
        }
        if self.batch_size_cap == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        validate_bounds(self.bounds)?;
        if let Some(cell) = self.cell_size {
            if !(cell.is_finite() && cell > 0.0) {
                return Err(ConfigError::InvalidCellSize(cell));
            }
        }
        Ok(())
    }
}

/// Configuration for [`Scenario::random`][crate::Scenario::random].
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioConfig {
    /// Region holding start, goal, and obstacles.
    /// Default: 800 x 600 at the origin
    pub bounds: Rect,

    /// Number of axis-aligned obstacle segments.
    /// Default: 10
    pub obstacle_count: usize,

    /// Obstacle endpoints are snapped to multiples of this unit.
    /// Default: 25
    pub snap_unit: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS,
            obstacle_count: 10,
            snap_unit: 25.0,
        }
    }
}

impl ScenarioConfig {
    /// Set the scenario region.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the number of obstacles.
    pub fn with_obstacle_count(mut self, obstacle_count: usize) -> Self {
        self.obstacle_count = obstacle_count;
        self
    }

    /// Set the snapping unit for obstacle endpoints.
    pub fn with_snap_unit(mut self, snap_unit: f64) -> Self {
        self.snap_unit = snap_unit;
        self
    }

    /// A planner configuration sampling over the same region.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::default().with_bounds(self.bounds)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bounds(self.bounds)?;
        if !(self.snap_unit.is_finite() && self.snap_unit > 0.0) {
            return Err(ConfigError::InvalidSnapUnit(self.snap_unit));
        }
        Ok(())
    }
}

fn validate_bounds(bounds: Rect) -> Result<(), ConfigError> {
    let finite = [bounds.x0, bounds.y0, bounds.x1, bounds.y1]
        .iter()
        .all(|v| v.is_finite());
    if finite && bounds.width() > 0.0 && bounds.height() > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_tree_size, 3000);
        assert_eq!(config.batch_size_cap, 8);
        assert_eq!(config.bounds, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(ScenarioConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let base = PlannerConfig::default();
        assert_eq!(
            base.clone().with_max_tree_size(0).validate(),
            Err(ConfigError::ZeroTreeSize)
        );
        assert_eq!(
            base.clone().with_batch_size_cap(0).validate(),
            Err(ConfigError::ZeroBatchSize)
        );
        let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(
            base.clone().with_bounds(flat).validate(),
            Err(ConfigError::InvalidBounds(flat))
        );
        assert!(matches!(
            base.clone()
                .with_bounds(Rect::new(0.0, 0.0, f64::INFINITY, 1.0))
                .validate(),
            Err(ConfigError::InvalidBounds(_))
        ));
        assert_eq!(
            base.with_cell_size(-1.0).validate(),
            Err(ConfigError::InvalidCellSize(-1.0))
        );
        assert_eq!(
            ScenarioConfig::default().with_snap_unit(0.0).validate(),
            Err(ConfigError::InvalidSnapUnit(0.0))
        );
    }

    #[test]
    fn grid_cell_size_prefers_override() {
        let config = PlannerConfig::default();
        assert_eq!(
            config.grid_cell_size(),
            suggested_cell_size(800.0, 600.0, 3000)
        );
        assert_eq!(config.with_cell_size(12.5).grid_cell_size(), 12.5);
    }

    #[test]
    fn tree_size_is_bounded_by_node_ids() {
        let base = PlannerConfig::default();
        assert_eq!(
            base.clone().with_max_tree_size(NodeId::LIMIT).validate(),
            Ok(())
        );
        assert_eq!(
            base.clone().with_max_tree_size(usize::MAX).validate(),
            Err(ConfigError::TreeSizeTooLarge(usize::MAX))
        );

        // A huge cap still yields a usable grid.
        let huge = base.with_max_tree_size(NodeId::LIMIT);
        assert_eq!(
            huge.grid_cell_size(),
            suggested_cell_size(800.0, 600.0, GRID_SIZING_LIMIT)
        );
    }
}
