// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering and driver helpers shared by the Bramble demos.
//!
//! The planner does no drawing. These helpers play the part of the display:
//! [`SvgScene`] accumulates edges as the planner reports them and renders the
//! finished picture, and [`drive`] calls [`Planner::step`] once per simulated
//! frame until the run ends.
//!
//! Run:
//! - `cargo run -p bramble_demos --example frame_loop`
//! - `cargo run -p bramble_demos --example restart`

mod svg;

pub use svg::{SvgScene, SvgStyle};

use bramble_index::Backend;
use bramble_rrt::{Planner, PlannerEvent, PlannerState, Sampler};
use log::info;

/// Outcome of driving one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Final planner state.
    pub state: PlannerState,
    /// Frames (calls to `step`) spent.
    pub frames: usize,
    /// Tree size at the end of the run.
    pub nodes: usize,
}

/// Step an initialized planner once per frame, feeding events to `scene`.
///
/// Stops at a terminal state or after `max_frames` frames.
pub fn drive<S: Sampler, B: Backend>(
    planner: &mut Planner<S, B>,
    scene: &mut SvgScene,
    max_frames: usize,
) -> RunSummary {
    let mut frames = 0;
    while !planner.state().is_terminal() && frames < max_frames {
        planner.step_with(|event| {
            if let PlannerEvent::EdgeAdded { from, to, .. } = event {
                scene.push_edge(from, to);
            }
        });
        frames += 1;
        if frames % 60 == 0 {
            info!(
                "frame {frames}: {} nodes, batch {}",
                planner.size(),
                planner.batch_size()
            );
        }
    }
    if let Some(path) = planner.path() {
        scene.set_path(path);
    }
    RunSummary {
        state: planner.state(),
        frames,
        nodes: planner.size(),
    }
}
