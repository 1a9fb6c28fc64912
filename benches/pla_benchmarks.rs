//! Benchmarks for PLA table generation
//!
//! Measures enumeration plus formatting for growing input counts, using prefixes
//! of the 16-input reference weight vector.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sac_espresso::{generate_pla, summarize, write_pla, REFERENCE_WEIGHTS};
use std::io;

fn bench_generate_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_pla");
    for n in [4usize, 8, 12, 16] {
        let weights = &REFERENCE_WEIGHTS[..n];
        group.throughput(Throughput::Elements(1u64 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| generate_pla(black_box(weights), n).unwrap())
        });
    }
    group.finish();
}

fn bench_stream_to_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_pla_sink");
    for n in [8usize, 16] {
        let weights = &REFERENCE_WEIGHTS[..n];
        group.throughput(Throughput::Elements(1u64 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| write_pla(black_box(weights), n, &mut io::sink()).unwrap())
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    c.bench_function("summarize_16", |b| {
        b.iter(|| summarize(black_box(&REFERENCE_WEIGHTS), 16).unwrap())
    });
}

criterion_group!(benches, bench_generate_string, bench_stream_to_sink, bench_summarize);
criterion_main!(benches);
