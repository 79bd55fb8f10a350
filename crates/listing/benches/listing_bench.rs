//! Listing benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the split-operate-join cycle (100 to 10K items)
//! - Sorting numeric, textual, and already sorted lists
//! - Duplicate handling
//! - Raw comparison cost of the default ordering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use listing::internals::algorithms::ordering::natural_cmp;
use listing::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a comma list of random integers.
fn generate_numeric_list(size: usize, seed: u64) -> Listing {
    let mut rng = SmallRng::seed_from_u64(seed);
    Listing::from_items((0..size).map(|_| rng.random_range(0..10_000u32)), Comma)
}

/// Generate a semicolon list of random lowercase words.
fn generate_word_list(size: usize, seed: u64) -> Listing {
    let mut rng = SmallRng::seed_from_u64(seed);
    let words = (0..size).map(|_| {
        (0..6)
            .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
            .collect::<String>()
    });
    Listing::from_items(words, Semicolon)
}

/// Generate a list where every item repeats `size / distinct` times.
fn generate_repetitive_list(size: usize, distinct: usize) -> Listing {
    Listing::from_items((0..size).map(|i| i % distinct), Comma)
}

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in SIZES {
        let list = generate_numeric_list(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("append", size), &list, |b, list| {
            b.iter(|| {
                let mut l = list.clone();
                l.append(black_box(7));
                l
            })
        });
        group.bench_with_input(BenchmarkId::new("insert_at_middle", size), &list, |b, list| {
            b.iter(|| {
                let mut l = list.clone();
                l.insert_at(black_box((size / 2) as isize), 7);
                l
            })
        });
        group.bench_with_input(BenchmarkId::new("get_at_last", size), &list, |b, list| {
            b.iter(|| list.get_at(black_box(-1)).map(str::len))
        });
        group.bench_with_input(BenchmarkId::new("reverse", size), &list, |b, list| {
            b.iter(|| {
                let mut l = list.clone();
                l.reverse();
                l
            })
        });
    }

    group.finish();
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    for size in SIZES {
        let numeric = generate_numeric_list(size, 7);
        let words = generate_word_list(size, 7);
        let mut sorted = numeric.clone();
        sorted.sort();
        group.throughput(Throughput::Elements(size as u64));

        for (name, list) in [("numeric", &numeric), ("words", &words), ("presorted", &sorted)] {
            group.bench_with_input(BenchmarkId::new(name, size), list, |b, list| {
                b.iter(|| {
                    let mut l = list.clone();
                    l.sort();
                    l
                })
            });
        }
    }

    group.finish();
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicates");

    for size in SIZES {
        let list = generate_repetitive_list(size, 50);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("duplicates", size), &list, |b, list| {
            b.iter(|| list.duplicates())
        });
        group.bench_with_input(BenchmarkId::new("remove_duplicates", size), &list, |b, list| {
            b.iter(|| {
                let mut l = list.clone();
                l.remove_duplicates();
                l
            })
        });
    }

    group.finish();
}

fn bench_natural_cmp(c: &mut Criterion) {
    let mut group = c.benchmark_group("natural_cmp");

    for (name, a, b) in [
        ("numbers", "1234.5", "987"),
        ("words", "lorem", "ipsum"),
        ("mixed", "42", "answer"),
    ] {
        group.bench_function(name, |bench| {
            bench.iter(|| natural_cmp(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_sorting,
    bench_duplicates,
    bench_natural_cmp
);
criterion_main!(benches);
