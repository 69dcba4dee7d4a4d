//! Benchmarks for the stateful generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use voss_noise::voss::summer::floor_at;
use voss_noise::Voss;

use crate::{OCTAVES, STEPS};

fn build(octaves: usize, clamp: bool) -> Voss {
    let mut builder = Voss::builder();
    for k in 0..octaves {
        // xorshift keeps the call cheap so the generator dominates
        let mut state = 0x2545_f491_4f6c_dd1du64.wrapping_add(k as u64);
        builder = builder.call(move |_, _| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        });
    }
    if clamp {
        builder = builder.summer(floor_at(0.0));
    }
    builder.build().expect("non-empty call list")
}

pub fn bench_stateful(c: &mut Criterion) {
    let mut group = c.benchmark_group("voss/stateful");

    for &octaves in OCTAVES {
        let mut voss = build(octaves, false);
        group.bench_with_input(BenchmarkId::new("sum", octaves), &octaves, |b, _| {
            b.iter(|| {
                for n in 0..STEPS {
                    black_box(voss.step(black_box(n)));
                }
            })
        });

        let mut voss = build(octaves, true);
        group.bench_with_input(BenchmarkId::new("floor", octaves), &octaves, |b, _| {
            b.iter(|| {
                for n in 0..STEPS {
                    black_box(voss.step(black_box(n)));
                }
            })
        });

        // Validation path
        let mut voss = build(octaves, false);
        group.bench_with_input(BenchmarkId::new("generate_f64", octaves), &octaves, |b, _| {
            b.iter(|| {
                for n in 0..STEPS {
                    black_box(voss.generate(black_box(n as f64)).ok());
                }
            })
        });
    }

    group.finish();
}
