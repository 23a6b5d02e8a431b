// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size, Vec2};
use superzoom_gesture::{InputEvent, Modifiers, PointerInput, SuperZoom, TouchInput, WheelInput};
use superzoom_transform::{ReferenceRenderer, ZoomOptions};

fn widget() -> SuperZoom<ReferenceRenderer> {
    let renderer =
        ReferenceRenderer::new(Rect::new(0.0, 0.0, 320.0, 240.0), Size::new(1280.0, 720.0));
    let options = ZoomOptions::default()
        .with_zoom_limits(0.25, 16.0)
        .with_snap_rotation(90.0, 10.0);
    SuperZoom::new(renderer, options).unwrap()
}

fn pinch_frames(frames: usize) -> Vec<[Point; 2]> {
    let center = Point::new(160.0, 120.0);
    (0..frames)
        .map(|i| {
            let t = i as f64 / frames as f64;
            let arm = Vec2::from_angle(t * 1.5) * (40.0 + 80.0 * t);
            [center + arm, center - arm]
        })
        .collect()
}

fn bench_touch_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/touch_pinch");

    // A full two-finger gesture: start, N moves, release with snapping.
    for frames in [32_usize, 512] {
        let stream = pinch_frames(frames);
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::from_parameter(frames), &stream, |b, stream| {
            b.iter_batched(
                widget,
                |mut w| {
                    w.touch_start(TouchInput::new(&stream[0]));
                    for touches in &stream[1..] {
                        w.touch_move(TouchInput::new(touches));
                    }
                    w.touch_end(TouchInput::new(&[]));
                    black_box(w.snapshot());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_mixed_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/mixed");

    let mut events = Vec::new();
    events.push(InputEvent::PointerDown(PointerInput::new(Point::new(10.0, 10.0))));
    for i in 0..256_u32 {
        let p = Point::new(10.0 + f64::from(i), 10.0 + f64::from(i % 7));
        events.push(InputEvent::PointerMove(PointerInput::new(p)));
        if i % 8 == 0 {
            let wheel = WheelInput::new(p, Vec2::new(3.0, -12.0)).with_modifiers(Modifiers::CONTROL);
            events.push(InputEvent::Wheel(wheel));
        }
    }
    events.push(InputEvent::PointerUp(PointerInput::new(Point::new(266.0, 10.0))));

    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("pan_and_trackpad", |b| {
        b.iter_batched(
            widget,
            |mut w| {
                for event in &events {
                    black_box(w.handle(event));
                }
                black_box(w.snapshot());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_touch_pinch, bench_mixed_stream);
criterion_main!(benches);
