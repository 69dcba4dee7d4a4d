//! Benchmarks for the Voss generators.
//!
//! Run with: cargo bench
//!
//! A generator step is one call per fired slot plus one summer pass, so
//! the cost should grow with the number of calls and stay allocation-light.
//!
//! Benchmark groups:
//!   - voss/stateful    Slot update and summer over all slots
//!   - voss/stateless   Per-step collection of fired values

use criterion::{criterion_group, criterion_main};

mod generators;

/// Call-list lengths (octaves) used across benchmarks.
pub const OCTAVES: &[usize] = &[1, 4, 8, 16];

/// Steps driven per iteration.
pub const STEPS: i64 = 1024;

criterion_group!(benches, generators::bench_stateful, generators::bench_stateless);
criterion_main!(benches);
