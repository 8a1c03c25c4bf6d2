// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_affine::{SquareMatrix, Transformation, Vector};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

fn random_transforms(n: usize, seed: u64) -> Vec<Transformation> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            Transformation::IDENTITY
                .scale(Vector::new(rng.next_f64(0.5, 2.0), rng.next_f64(0.5, 2.0)))
                .rotate(rng.next_f64(-3.0, 3.0))
                .translate(Vector::new(
                    rng.next_f64(-100.0, 100.0),
                    rng.next_f64(-100.0, 100.0),
                ))
        })
        .collect()
}

fn random_matrix(dim: usize, rng: &mut Lcg) -> SquareMatrix {
    let rows: Vec<Vec<f64>> = (0..dim)
        .map(|i| {
            (0..dim)
                .map(|j| {
                    // Diagonally dominant, so always invertible.
                    let v = rng.next_f64(-1.0, 1.0);
                    if i == j { v + dim as f64 } else { v }
                })
                .collect()
        })
        .collect();
    SquareMatrix::new(&rows).expect("rows are square")
}

fn bench_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_affine");
    let transforms = random_transforms(1_024, 0xAFF1_0000_0000_0001);

    group.bench_function("compose_chain(n=1024)", |b| {
        b.iter(|| {
            let t = transforms
                .iter()
                .fold(Transformation::IDENTITY, |acc, t| acc.transform(t));
            black_box(t);
        });
    });

    group.bench_function("inverse(n=1024)", |b| {
        b.iter(|| {
            for t in &transforms {
                let _ = black_box(t.inverse());
            }
        });
    });

    group.bench_function("info(n=1024)", |b| {
        b.iter(|| {
            for t in &transforms {
                black_box(t.info());
            }
        });
    });

    group.bench_function("encode_decode(n=1024)", |b| {
        b.iter(|| {
            for t in &transforms {
                let encoded = t.to_string();
                let _ = black_box(encoded.parse::<Transformation>());
            }
        });
    });

    let mut rng = Lcg::new(0x5EED_0000_0000_0002);
    for dim in [2_usize, 3, 8] {
        let m = random_matrix(dim, &mut rng);
        group.bench_with_input(BenchmarkId::new("square_inverse", dim), &m, |b, m| {
            b.iter(|| black_box(m.inverse()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
