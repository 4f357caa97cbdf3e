// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grow a tree across a random obstacle field one frame at a time.
//!
//! This example shows how a display loop drives the planner:
//! - generate a scenario with `Scenario::random`,
//! - call `Planner::step_with` once per frame, drawing each new edge,
//! - draw the path once the run is solved.
//!
//! The "display" is an SVG file written at the end.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p bramble_demos --example frame_loop -- [seed] [out.svg]`

use bramble_demos::{SvgScene, drive};
use bramble_rrt::{PlanError, Planner, PlannerState, Scenario, ScenarioConfig};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), PlanError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let out = args.next().unwrap_or_else(|| "frame_loop.svg".to_string());

    let scenario_config = ScenarioConfig::default();
    let scenario = Scenario::random(&scenario_config, &mut StdRng::seed_from_u64(seed))?;
    info!(
        "scenario: start {:?}, goal {:?}, {} obstacles",
        scenario.start,
        scenario.goal,
        scenario.obstacles.len()
    );

    let mut planner = Planner::new(scenario_config.planner_config().with_seed(seed))?;
    planner.initialize_scenario(&scenario);

    let mut scene = SvgScene::new(
        scenario.bounds,
        scenario.start,
        scenario.goal,
        &scenario.obstacles,
    )
    .with_title(format!("seed {seed}"));

    // One step per frame, at most ten minutes of 60 Hz frames.
    let summary = drive(&mut planner, &mut scene, 36_000);
    let stats = planner.stats();
    match summary.state {
        PlannerState::Solved => {
            let path = planner.path().expect("solved runs have a path");
            println!(
                "solved in {} frames: {} nodes, path of {} points, length {:.1}",
                summary.frames,
                summary.nodes,
                path.len(),
                path.length()
            );
        }
        PlannerState::Exhausted => println!(
            "exhausted after {} frames: {} samples, {} rejected",
            summary.frames, stats.samples, stats.rejected
        ),
        state => warn!("stopped in state {state:?} after {} frames", summary.frames),
    }

    match scene.save(&out) {
        Ok(()) => println!("wrote {out}"),
        Err(e) => warn!("could not write {out}: {e}"),
    }
    Ok(())
}
