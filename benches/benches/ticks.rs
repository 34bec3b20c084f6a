// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_axis::{TickPlan, TickPlanner, TickPolicy};

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_axis");

    for &(min, max) in &[(0.0_f64, 100.0_f64), (-1234.5, 98_765.4), (0.000_12, 0.000_97)] {
        let planner = TickPlanner::default();
        group.bench_function(format!("plan(min={min},max={max})"), |b| {
            b.iter(|| black_box(planner.plan(black_box(min), black_box(max))));
        });

        // Steady state: a plan reused across frames never reallocates.
        let mut plan = TickPlan::new();
        group.bench_function(format!("plan_into(min={min},max={max})"), |b| {
            b.iter(|| {
                planner.plan_into(black_box(min), black_box(max), &mut plan);
                black_box(plan.len());
            });
        });
    }

    let centered = TickPlanner::new(
        TickPolicy::default()
            .with_label_count(12)
            .with_centered_labels(true),
    );
    let mut plan = TickPlan::new();
    group.bench_function("plan_into_centered(labels=12)", |b| {
        b.iter(|| {
            centered.plan_into(black_box(-50.0), black_box(950.0), &mut plan);
            black_box(plan.centered().map(<[f64]>::len));
        });
    });

    // A zoom gesture replans on every frame with a shifting range.
    let planner = TickPlanner::default();
    group.bench_function("plan_into_zoom_sweep(frames=240)", |b| {
        b.iter(|| {
            for frame in 0..240_u32 {
                let span = 1000.0 / (1.0 + f64::from(frame) * 0.05);
                planner.plan_into(500.0 - span / 2.0, 500.0 + span / 2.0, &mut plan);
                black_box(plan.interval());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
