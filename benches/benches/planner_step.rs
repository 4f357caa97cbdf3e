// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bramble_collide::{Obstacle, ObstacleSet};
use bramble_index::backends::FlatVec;
use bramble_rrt::{Planner, PlannerConfig, Scenario, ScenarioConfig, UniformSampler};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::StdRng;

// A goal boxed in by four walls, so runs always grow to the node cap.
fn caged_goal() -> (Point, Point, ObstacleSet) {
    let obstacles = [
        Obstacle::new((380.0, 280.0), (420.0, 280.0)),
        Obstacle::new((420.0, 280.0), (420.0, 320.0)),
        Obstacle::new((420.0, 320.0), (380.0, 320.0)),
        Obstacle::new((380.0, 320.0), (380.0, 280.0)),
    ]
    .into_iter()
    .collect();
    (Point::new(50.0, 50.0), Point::new(400.0, 300.0), obstacles)
}

fn bench_exhaust(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaust");
    let (start, goal, obstacles) = caged_goal();
    for &cap in &[500usize, 3000] {
        let config = PlannerConfig::default().with_max_tree_size(cap).with_seed(1);
        group.bench_function(format!("grid_cap{}", cap), |b| {
            b.iter_batched(
                || Planner::new(config.clone()).unwrap(),
                |mut planner| {
                    planner.initialize(start, goal, obstacles.clone());
                    black_box(planner.run_to_completion(usize::MAX));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("flatvec_cap{}", cap), |b| {
            b.iter_batched(
                || {
                    Planner::with_backend(
                        config.clone(),
                        UniformSampler::from_seed(1),
                        FlatVec::default(),
                    )
                    .unwrap()
                },
                |mut planner| {
                    planner.initialize(start, goal, obstacles.clone());
                    black_box(planner.run_to_completion(usize::MAX));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

// Latency of one step on a tree already at the largest batch size.
fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");
    let (start, goal, obstacles) = caged_goal();
    let config = PlannerConfig::default().with_seed(2);
    group.bench_function("grid_at_2000_nodes", |b| {
        b.iter_batched(
            || {
                let mut planner = Planner::new(config.clone()).unwrap();
                planner.initialize(start, goal, obstacles.clone());
                while planner.size() < 2000 {
                    let _ = planner.step();
                }
                planner
            },
            |mut planner| black_box(planner.step()),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_random_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_scenarios");
    let scenario_config = ScenarioConfig::default();
    let mut rng = StdRng::seed_from_u64(2025);
    let scenarios: Vec<Scenario> = (0..16)
        .map(|_| Scenario::random(&scenario_config, &mut rng).unwrap())
        .collect();
    let config = scenario_config.planner_config().with_seed(3);
    group.bench_function("solve_16", |b| {
        b.iter(|| {
            let mut planner = Planner::new(config.clone()).unwrap();
            for scenario in &scenarios {
                planner.initialize_scenario(scenario);
                black_box(planner.run_to_completion(usize::MAX));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_exhaust,
    bench_single_step,
    bench_random_scenarios
);
criterion_main!(benches);
