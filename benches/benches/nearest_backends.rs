// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bramble_benches::{clustered_points, uniform_points};
use bramble_index::{Aabb2D, Index};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn region() -> Aabb2D {
    Aabb2D::new(0.0, 0.0, WIDTH, HEIGHT)
}

fn bench_flatvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatvec");
    let queries = uniform_points(7, 256, WIDTH, HEIGHT);
    for &n in &[300usize, 1000, 3000] {
        let points = uniform_points(1, n, WIDTH, HEIGHT);
        let mut idx: Index<u32> = Index::new();
        for (i, p) in points.iter().enumerate() {
            let _ = idx.insert(p.x, p.y, i as u32);
        }
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("nearest_uniform_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(idx.nearest(q.x, q.y));
                }
            })
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let queries = uniform_points(7, 256, WIDTH, HEIGHT);
    for &n in &[300usize, 1000, 3000] {
        let points = uniform_points(1, n, WIDTH, HEIGHT);
        let mut idx = Index::<u32>::with_grid_for(region(), n);
        for (i, p) in points.iter().enumerate() {
            let _ = idx.insert(p.x, p.y, i as u32);
        }
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("nearest_uniform_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(idx.nearest(q.x, q.y));
                }
            })
        });
    }

    let clustered = clustered_points(3, 3000, WIDTH, HEIGHT);
    let mut idx = Index::<u32>::with_grid_for(region(), clustered.len());
    for (i, p) in clustered.iter().enumerate() {
        let _ = idx.insert(p.x, p.y, i as u32);
    }
    group.bench_function("nearest_clustered_n3000", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(idx.nearest(q.x, q.y));
            }
        })
    });
    group.finish();
}

// Interleaved insert and nearest, the access pattern of tree growth.
fn bench_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow");
    let points: Vec<Point> = uniform_points(11, 3000, WIDTH, HEIGHT);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("flatvec_n3000", |b| {
        b.iter_batched(
            Index::<u32>::new,
            |mut idx| {
                for (i, p) in points.iter().enumerate() {
                    black_box(idx.nearest(p.x, p.y));
                    let _ = idx.insert(p.x, p.y, i as u32);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("grid_n3000", |b| {
        b.iter_batched(
            || Index::<u32>::with_grid_for(region(), points.len()),
            |mut idx| {
                for (i, p) in points.iter().enumerate() {
                    black_box(idx.nearest(p.x, p.y));
                    let _ = idx.insert(p.x, p.y, i as u32);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_flatvec, bench_grid, bench_grow);
criterion_main!(benches);
