// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration, tree construction, and planning.

use kurbo::Rect;
use thiserror::Error;

use crate::tree::NodeId;

/// A configuration value that cannot drive a planning run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The node cap must admit at least the root.
    #[error("max_tree_size must be at least 1")]
    ZeroTreeSize,

    /// Node ids are 32-bit, so the cap cannot exceed [`NodeId::LIMIT`].
    #[error("max_tree_size must be at most {limit}, got {0}", limit = NodeId::LIMIT)]
    TreeSizeTooLarge(usize),

    /// Each step must be allowed at least one sampling attempt.
    #[error("batch_size_cap must be at least 1")]
    ZeroBatchSize,

    /// Sampling bounds must be finite with a positive area.
    #[error("bounds must be finite with positive width and height, got {0:?}")]
    InvalidBounds(Rect),

    /// A grid cell edge must be finite and positive.
    #[error("cell_size must be finite and positive, got {0}")]
    InvalidCellSize(f64),

    /// Obstacle endpoints are snapped to multiples of a finite, positive unit.
    #[error("snap_unit must be finite and positive, got {0}")]
    InvalidSnapUnit(f64),
}

/// A rejected tree insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The declared parent has not been inserted.
    #[error("parent {0:?} is not in the tree")]
    UnknownParent(NodeId),

    /// A parentless node was inserted into a non-empty tree.
    #[error("tree already has a root")]
    RootExists,

    /// A child was inserted before the root.
    #[error("tree has no root")]
    MissingRoot,

    /// The tree already holds [`NodeId::LIMIT`] nodes.
    #[error("tree is full")]
    Full,
}

/// Errors surfaced by the fallible planner API.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlanError {
    /// `step` was called before `initialize`.
    #[error("planner has not been initialized")]
    NotInitialized,

    /// The planner configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
