// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use cleat_core::math::interval::Interval;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Generates `n` short intervals with bounds in `[-n, n]` so that a good
/// share of neighbouring pairs overlap or touch.
fn random_intervals(n: usize, seed: u64) -> Vec<Interval<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = n as i64;
    (0..n)
        .map(|_| {
            let lo = rng.random_range(-bound..=bound);
            let span = rng.random_range(0..16);
            Interval::new_unchecked(lo, lo + span)
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_sort");
    for n in SIZES {
        let intervals = random_intervals(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &intervals, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                v.sort_unstable();
                black_box(v)
            })
        });
    }
    group.finish();
}

fn bench_relations(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_relations");
    for n in SIZES {
        let intervals = random_intervals(n, 7);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("overlaps", n), &intervals, |b, input| {
            b.iter(|| {
                input
                    .windows(2)
                    .filter(|w| black_box(w[0]).overlaps(black_box(w[1])))
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("is_adjacent", n), &intervals, |b, input| {
            b.iter(|| {
                input
                    .windows(2)
                    .filter(|w| black_box(w[0]).is_adjacent(black_box(w[1])))
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("dominates", n), &intervals, |b, input| {
            b.iter(|| {
                input
                    .windows(2)
                    .filter(|w| black_box(w[0]).dominates(black_box(w[1])))
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_merge");
    for n in SIZES {
        let mut intervals = random_intervals(n, 1337);
        intervals.sort_unstable();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &intervals, |b, input| {
            b.iter(|| {
                input
                    .windows(2)
                    .filter_map(|w| black_box(w[0]).merge(black_box(w[1])).ok())
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_relations, bench_merge);
criterion_main!(benches);
