//! Insert and search benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fantree::BTree;

const KEYS: u32 = 10_000;

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_10k_ascending_order16", |b| {
        b.iter(|| {
            let mut tree = BTree::new(16).unwrap();
            for key in 0..KEYS {
                tree.insert(black_box(key), key);
            }
            tree
        })
    });

    c.bench_function("insert_10k_descending_order16", |b| {
        b.iter(|| {
            let mut tree = BTree::new(16).unwrap();
            for key in (0..KEYS).rev() {
                tree.insert(black_box(key), key);
            }
            tree
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut tree = BTree::new(16).unwrap();
    for key in 0..KEYS {
        tree.insert(key, key);
    }

    c.bench_function("search_hit_order16", |b| {
        b.iter(|| tree.search(black_box(&4_321)))
    });

    c.bench_function("search_miss_order16", |b| {
        b.iter(|| tree.search(black_box(&(KEYS + 1))))
    });
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
