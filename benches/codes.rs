//! A benchmark for the two code generators.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use golomb::coding::{exp_golomb, golomb};
use rand::prelude::*;
use rand_distr::{Distribution, Geometric};

/// Draw geometrically distributed values, the source family both codes are
/// tuned for.
fn geometric_values(n: usize, p: f64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x1982);
    let dist = Geometric::new(p).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

fn encode_golomb(values: &[u64], m: u64) {
    for &val in values {
        let _ = black_box(golomb::encode(val, m).unwrap());
    }
}

fn encode_exp_golomb(values: &[u64], k: u32) {
    for &val in values {
        let _ = black_box(exp_golomb::encode(val, k).unwrap());
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let values = geometric_values(10_000, 0.2);

    c.bench_function("golomb m=5", |b| b.iter(|| encode_golomb(&values, 5)));
    c.bench_function("golomb m=8", |b| b.iter(|| encode_golomb(&values, 8)));
    c.bench_function("exp golomb k=0", |b| {
        b.iter(|| encode_exp_golomb(&values, 0))
    });
    c.bench_function("exp golomb k=3", |b| {
        b.iter(|| encode_exp_golomb(&values, 3))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
