// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_manipulator::{Handle, Manipulator, Options, PointerInput, Side};

/// A press on `target`, `steps` moves along a diagonal, then a release.
fn script(target: Handle, start: Point, steps: usize) -> Vec<PointerInput> {
    let mut events = Vec::with_capacity(steps + 2);
    events.push(PointerInput::press(start, Some(target)));
    for i in 1..=steps {
        let t = i as f64;
        events.push(PointerInput::move_to(Point::new(
            start.x + t * 0.5,
            start.y + t * 0.25,
        )));
    }
    let last = events.last().map_or(start, |e| e.position);
    events.push(PointerInput::release(last));
    events
}

fn replay(m: &mut Manipulator<()>, events: &[PointerInput]) {
    for e in events {
        black_box(m.handle(e));
    }
}

fn bench_gesture_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_manipulator");
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    let cases = [
        ("move", Options::default(), Handle::Body, Point::new(50.0, 50.0)),
        (
            "resize",
            Options::default(),
            Handle::Anchor(Side::BottomRight),
            Point::new(200.0, 100.0),
        ),
        (
            "scale",
            Options::default().resizable(false).scalable(true),
            Handle::Anchor(Side::TopLeft),
            Point::new(0.0, 0.0),
        ),
        (
            "rotate",
            Options::default(),
            Handle::RotationHandle,
            Point::new(100.0, -25.0),
        ),
        (
            "warp",
            Options::default().warpable(true),
            Handle::Anchor(Side::TopRight),
            Point::new(200.0, 0.0),
        ),
    ];

    for steps in [16_usize, 256] {
        for (name, options, target, start) in cases {
            let events = script(target, start, steps);
            group.bench_function(format!("{name}(steps={steps})"), |b| {
                b.iter_batched(
                    || Manipulator::new(rect, ()).with_options(options),
                    |mut m| {
                        replay(&mut m, &events);
                        m
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_gesture_replay);
criterion_main!(benches);
