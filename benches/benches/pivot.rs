// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size};
use superzoom_transform::{ReferenceRenderer, Renderer, TransformState, ZoomOptions, solve_pivot_fraction};

fn state(angle: f64) -> TransformState<ReferenceRenderer> {
    let renderer =
        ReferenceRenderer::new(Rect::new(0.0, 0.0, 320.0, 240.0), Size::new(1280.0, 720.0));
    let options = ZoomOptions::default()
        .with_zoom_limits(0.25, 16.0)
        .with_initial_zoom(2.0)
        .with_initial_angle(angle);
    TransformState::new(renderer, options).unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("pivot/solve");

    // The solver is pure arithmetic; angle only matters for trig cost.
    for angle in [0.0, 37.0, 90.0, 211.0] {
        let s = state(angle);
        let rect = s.renderer().measure();
        let targets: Vec<Point> = (0..256_u32)
            .map(|i| Point::new(f64::from(i % 16) * 20.0, f64::from(i / 16) * 15.0))
            .collect();
        group.throughput(Throughput::Elements(targets.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(angle), &targets, |b, targets| {
            b.iter(|| {
                for &target in targets {
                    black_box(solve_pivot_fraction(
                        target,
                        rect,
                        s.angle(),
                        s.zoom(),
                        s.base_size(),
                    ));
                }
            });
        });
    }

    group.finish();
}

fn bench_rotate_about_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("pivot/rotate_to");

    // Each rotation measures twice for pivot relocation and commits once.
    for steps in [16_u32, 256] {
        group.throughput(Throughput::Elements(u64::from(steps)));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter_batched(
                || state(0.0),
                |mut s| {
                    for i in 0..steps {
                        let p = Point::new(f64::from(i % 32) * 10.0, f64::from(i % 24) * 10.0);
                        s.rotate_by(1.5, Some(p));
                    }
                    black_box(s.snapshot());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve, bench_rotate_about_point);
criterion_main!(benches);
