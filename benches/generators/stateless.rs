//! Benchmarks for the stateless generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use voss_noise::VossStateless;

use crate::{OCTAVES, STEPS};

fn build(octaves: usize) -> VossStateless {
    let mut builder = VossStateless::builder();
    for _ in 0..octaves {
        builder = builder.call(|n, k| {
            let x = (n as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ k as u64;
            (x >> 11) as f64 / (1u64 << 53) as f64
        });
    }
    builder.build().expect("non-empty call list")
}

pub fn bench_stateless(c: &mut Criterion) {
    let mut group = c.benchmark_group("voss/stateless");

    for &octaves in OCTAVES {
        let voss = build(octaves);
        group.bench_with_input(BenchmarkId::new("sum", octaves), &octaves, |b, _| {
            b.iter(|| {
                for n in 0..STEPS {
                    black_box(voss.step(black_box(n)));
                }
            })
        });
    }

    group.finish();
}
