//! Criterion benchmarks for the indexed heap and the k-way merge
//!
//! Inputs come from a seeded PRNG so runs are reproducible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use indexed_minheap::merge::merge;
use indexed_minheap::IndexedBinaryHeap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generates `k` sorted runs of `len` random values each
fn sorted_runs(seed: u64, k: usize, len: usize) -> Vec<Vec<u64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..k)
        .map(|_| {
            let mut run: Vec<u64> = (0..len).map(|_| rng.random_range(0..1_000_000)).collect();
            run.sort_unstable();
            run
        })
        .collect()
}

fn bench_kway_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("kway_merge");
    for &k in &[4usize, 16, 64] {
        let runs = sorted_runs(0xA5A5, k, 4096);
        group.bench_with_input(BenchmarkId::from_parameter(k), &runs, |b, runs| {
            b.iter(|| {
                let merged = merge(runs.iter().map(|run| run.iter().copied()));
                black_box(merged.count())
            })
        });
    }
    group.finish();
}

fn bench_queue_churn(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    let keys: Vec<u64> = (0..1024).map(|_| rng.random_range(0..1_000_000)).collect();

    c.bench_function("insert_change_extract_1024", |b| {
        b.iter(|| {
            let mut pq = IndexedBinaryHeap::new(keys.len());
            for (handle, &key) in keys.iter().enumerate() {
                pq.insert(handle, key).unwrap();
            }
            for (handle, &key) in keys.iter().enumerate() {
                pq.change_key(handle, key / 2).unwrap();
            }
            while let Ok(handle) = pq.extract_min() {
                black_box(handle);
            }
        })
    });
}

criterion_group!(benches, bench_kway_merge, bench_queue_churn);
criterion_main!(benches);
