// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_homography::{Matrix, ProjectiveMatrix, Vertices, invert};

fn bench_homography(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_homography");

    let source = Vertices::from_size(Size::new(320.0, 240.0));
    let target = Vertices::new(
        Point::new(12.0, -8.0),
        Point::new(-4.0, 250.0),
        Point::new(330.0, 6.0),
        Point::new(300.0, 260.0),
    );
    group.bench_function("from_quads", |b| {
        b.iter(|| ProjectiveMatrix::from_quads(black_box(&source), black_box(&target)));
    });

    for n in [4_usize, 8, 16] {
        // Diagonally dominant, so never singular.
        let mut m = Matrix::zeros(n, n);
        for r in 0..n {
            for col in 0..n {
                m[(r, col)] = if r == col {
                    n as f64 + 1.0
                } else {
                    ((r * 7 + col * 3) % 5) as f64 * 0.1
                };
            }
        }
        group.bench_function(format!("invert(n={n})"), |b| {
            b.iter(|| invert(black_box(&m)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_homography);
criterion_main!(benches);
