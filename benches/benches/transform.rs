// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_chart_viewport::{GeometryScratch, TransformPipeline, ViewportState};

fn setup() -> (ViewportState, TransformPipeline) {
    let mut viewport = ViewportState::new();
    viewport.set_dimensions(1920.0, 1080.0);
    viewport.restrain(80.0, 20.0, 40.0, 60.0);
    let pivot = Point::new(900.0, -500.0);
    viewport.commit(viewport.zoom_by(3.0, 2.0, pivot), None);

    let mut pipeline = TransformPipeline::new();
    pipeline.prepare_value_to_pixel(&viewport, 0.0, 10_000.0, 250.0, -50.0);
    pipeline.prepare_offset(&viewport, false);
    (viewport, pipeline)
}

fn series(n: u32) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = f64::from(i) * 10_000.0 / f64::from(n);
            Point::new(x, (x * 0.01).sin() * 100.0 + 50.0)
        })
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_chart_viewport");
    let (viewport, pipeline) = setup();

    for &n in &[1_000_u32, 100_000_u32] {
        let points = series(n);
        group.bench_function(format!("map_points_to_pixel(n={n})"), |b| {
            b.iter_batched(
                || points.clone(),
                |mut pts| {
                    pipeline
                        .map_points_to_pixel(&viewport, &mut pts)
                        .expect("pipeline is prepared");
                    black_box(pts);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("effective_matrix", |b| {
        b.iter(|| black_box(pipeline.effective_matrix(black_box(&viewport))));
    });

    group.bench_function("commit_pan_gesture(frames=120)", |b| {
        b.iter_batched(
            || viewport.clone(),
            |mut vp| {
                for _ in 0..120 {
                    let candidate = vp.pan_by((-7.5, 3.0).into());
                    vp.commit(candidate, None);
                }
                black_box(vp.translate_x());
            },
            BatchSize::SmallInput,
        );
    });

    let mut scratch = GeometryScratch::new(64);
    group.bench_function("value_for_pixel_pooled(n=64)", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..64_u32)
                .map(|i| {
                    pipeline
                        .value_for_pixel_pooled(
                            &viewport,
                            Point::new(80.0 + f64::from(i) * 28.0, 500.0),
                            &mut scratch,
                        )
                        .expect("pipeline is prepared")
                })
                .collect();
            scratch.release_points(&handles).expect("handles are live");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
