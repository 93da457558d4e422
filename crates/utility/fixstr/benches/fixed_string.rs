//! Benchmarks for the hot string operations.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fixstr::FixedString;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for &chunk in &[4usize, 16, 64] {
        let units = vec![b'x'; chunk];
        group.throughput(Throughput::Bytes(256));
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &units, |b, units| {
            b.iter(|| {
                let mut s = FixedString::<256>::new();
                while s.append(black_box(units)).is_ok() {}
                s
            });
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut haystack = FixedString::<512>::new();
    while haystack.append(b"abcabd").is_ok() {}
    haystack.truncate(haystack.len() - 4);
    assert!(haystack.append(b"abce").is_ok());

    c.bench_function("find", |b| {
        b.iter(|| black_box(&haystack).find(black_box(b"abce")));
    });
    c.bench_function("rfind", |b| {
        b.iter(|| black_box(&haystack).rfind(black_box(b"abcabd")));
    });
}

fn bench_hash(c: &mut Criterion) {
    let s: FixedString<64> = "the quick brown fox jumps over the lazy dog".parse().unwrap();

    c.bench_function("hash", |b| {
        b.iter(|| {
            let mut hasher = DefaultHasher::new();
            black_box(&s).hash(&mut hasher);
            hasher.finish()
        });
    });
}

criterion_group!(benches, bench_append, bench_find, bench_hash);
criterion_main!(benches);
