//! Construction and search benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kwix::index::SuffixArray;
use kwix::search::KwicScanner;

fn pseudo_random_text(len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            alphabet[(state >> 16) as usize % alphabet.len()]
        })
        .collect()
}

fn english_like_text(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &len in &[1 << 10, 1 << 14, 1 << 17] {
        let random = pseudo_random_text(len, b"acgt");
        group.bench_with_input(BenchmarkId::new("random_4", len), &random, |b, text| {
            b.iter(|| SuffixArray::build(black_box(text)))
        });

        let english = english_like_text(len);
        group.bench_with_input(BenchmarkId::new("english_cycle", len), &english, |b, text| {
            b.iter(|| SuffixArray::build(black_box(text)))
        });

        let run = vec![b'a'; len];
        group.bench_with_input(BenchmarkId::new("single_symbol", len), &run, |b, text| {
            b.iter(|| SuffixArray::build(black_box(text)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let text = pseudo_random_text(1 << 17, b"acgt");
    let sa = SuffixArray::build(&text);
    let needle = text[4096..4104].to_vec();

    c.bench_function("search_range", |b| {
        b.iter(|| sa.search(black_box(&needle)))
    });

    let scanner = KwicScanner::with_default_context(&sa);
    c.bench_function("kwic_scan", |b| b.iter(|| scanner.scan(black_box(&needle))));
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
