// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restart the planner on a series of fresh scenarios.
//!
//! A failed run carries nothing worth keeping, so retrying means calling
//! `initialize` again on a new layout. This example reuses one planner for
//! many scenarios and reports how each ended.
//!
//! Run:
//! - `cargo run -p bramble_demos --example restart -- [runs]`

use bramble_rrt::{PlanError, Planner, PlannerState, Scenario, ScenarioConfig};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), PlanError> {
    env_logger::init();

    let runs: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);

    let scenario_config = ScenarioConfig::default().with_obstacle_count(16);
    let mut rng = StdRng::seed_from_u64(7);
    let mut planner = Planner::new(scenario_config.planner_config().with_seed(7))?;

    let (mut direct, mut solved, mut exhausted) = (0, 0, 0);
    for run in 0..runs {
        let scenario = Scenario::random(&scenario_config, &mut rng)?;
        planner.initialize_scenario(&scenario);
        if planner.state() == PlannerState::Solved {
            direct += 1;
            continue;
        }
        let state = planner.run_to_completion(usize::MAX);
        debug!("run {run}: {state:?} with {} nodes", planner.size());
        match state {
            PlannerState::Solved => solved += 1,
            PlannerState::Exhausted => exhausted += 1,
            _ => {}
        }
    }
    println!("{runs} runs: {direct} direct, {solved} solved, {exhausted} exhausted");
    Ok(())
}
