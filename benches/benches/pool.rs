// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_pool::ObjectPool;

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_pool");

    for &capacity in &[8_usize, 256_usize] {
        group.bench_function(format!("acquire_recycle(capacity={capacity})"), |b| {
            let mut pool = ObjectPool::new(capacity, || Point::ZERO);
            b.iter(|| {
                let handle = pool.acquire().expect("pool refills");
                *pool.value_mut(handle).expect("handle is live") = Point::new(1.0, 2.0);
                pool.recycle(black_box(handle)).expect("handle is live");
            });
        });
    }

    // Drain far past capacity, then return everything in one batch.
    for &(capacity, live) in &[(16_usize, 1_024_usize), (1_024, 1_024)] {
        group.bench_function(
            format!("burst_then_recycle_all(capacity={capacity},live={live})"),
            |b| {
                b.iter_batched(
                    || ObjectPool::new(capacity, || Point::ZERO),
                    |mut pool| {
                        let handles: Vec<_> = (0..live)
                            .map(|_| pool.acquire().expect("pool refills"))
                            .collect();
                        pool.recycle_all(&handles).expect("handles are live");
                        black_box(pool.free_count());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pool);
criterion_main!(benches);
