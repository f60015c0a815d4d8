//! Benchmarks for insertion, queries and the record round trip

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_db::RadixTree;

/// Deterministic pseudo-words over a small alphabet, so prefixes are shared
fn words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 6) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let data = words(10_000);
    c.bench_function("insert 10k", |b| {
        b.iter(|| RadixTree::from_strings(black_box(&data)))
    });
}

fn bench_queries(c: &mut Criterion) {
    let data = words(10_000);
    let tree = RadixTree::from_strings(&data);

    c.bench_function("contains", |b| {
        b.iter(|| data.iter().filter(|w| tree.contains(black_box(w))).count())
    });
    c.bench_function("parents", |b| b.iter(|| tree.parents(black_box("abcdefabcd"))));
    c.bench_function("kids", |b| b.iter(|| tree.kids(black_box("abc"))));
    c.bench_function("iterate", |b| b.iter(|| tree.iter().count()));
}

fn bench_records(c: &mut Criterion) {
    let tree = RadixTree::from_strings(words(10_000));
    let records = tree.export();

    c.bench_function("export", |b| b.iter(|| tree.export()));
    c.bench_function("import", |b| {
        b.iter(|| RadixTree::from_records(black_box(records.clone())))
    });
}

criterion_group!(benches, bench_insert, bench_queries, bench_records);
criterion_main!(benches);
