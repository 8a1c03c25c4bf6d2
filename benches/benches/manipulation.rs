// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_affine::{Transformation, Vector};
use understory_manipulator::gesture::{adjacent_angle, scale_ratio};
use understory_manipulator::{
    BoundingExtent, HandleId, Layout, ManipulationController, ManipulationHost, ManipulatorConfig,
};

struct NullHost;

impl ManipulationHost for NullHost {
    fn screen_to_local(&self, screen: Point) -> Vector {
        screen.into()
    }

    fn on_transform_changed(&mut self, transform: &Transformation, _: &BoundingExtent) {
        black_box(transform);
    }
}

fn controller() -> ManipulationController<u32> {
    ManipulationController::new(
        0..16,
        Transformation::IDENTITY.rotate(0.3).scale(1.5),
        BoundingExtent::new(0.0, 0.0, 400.0, 300.0),
        ManipulatorConfig::default(),
    )
    .expect("valid session")
}

/// Pointer positions along a circle around `center`.
fn circle_path(center: Point, radius: f64, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let a = i as f64 / steps as f64 * core::f64::consts::TAU;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

fn bench_manipulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_manipulator");
    group.sample_size(50);

    let pivot = Vector::new(200.0, 150.0);
    group.bench_function("adjacent_angle", |b| {
        b.iter(|| {
            black_box(adjacent_angle(
                black_box(Vector::new(400.0, 150.0)),
                black_box(Vector::new(200.0, 450.0)),
                pivot,
            ))
        });
    });
    group.bench_function("scale_ratio", |b| {
        b.iter(|| {
            black_box(scale_ratio(
                black_box(Vector::new(0.0, 0.0)),
                black_box(Vector::new(-200.0, -150.0)),
                pivot,
            ))
        });
    });

    let session = controller();
    group.bench_function("layout", |b| {
        b.iter(|| black_box(session.layout()));
    });

    let layout = Layout::compute(
        &session.transform(),
        &session.extent(),
        session.config(),
    );
    let probes = circle_path(Point::new(300.0, 300.0), 250.0, 256);
    group.bench_function("hit_test(n=256)", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(layout.hit_test(Vector::from(*p)));
            }
        });
    });

    for (name, handle) in [
        ("drag", HandleId::Dragger),
        ("rotate", HandleId::Rotate),
        ("scale", HandleId::BottomRight),
    ] {
        let path = circle_path(Point::new(300.0, 250.0), 180.0, 256);
        group.bench_function(format!("gesture_{name}(moves=256)"), |b| {
            b.iter_batched(
                controller,
                |mut session| {
                    let mut host = NullHost;
                    session.start(&mut host, handle, path[0]);
                    for p in &path[1..] {
                        session.update(&mut host, *p);
                    }
                    session.stop(&mut host);
                    black_box(session.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_manipulation);
criterion_main!(benches);
