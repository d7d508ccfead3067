use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use algo_patterns::{group_by_key, is_anagram};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn sorted_anagram(a: &str, b: &str) -> bool {
    let mut x: Vec<char> = a.chars().collect();
    let mut y: Vec<char> = b.chars().collect();
    x.sort_unstable();
    y.sort_unstable();
    x == y
}

fn bench_anagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("anagram");
    for &len in &[1_000usize, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_text(&mut rng, len);
        let b: String = a.chars().rev().collect();
        group.bench_with_input(BenchmarkId::new("unstacking", len), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| criterion::black_box(is_anagram(a, b)))
        });
        group.bench_with_input(BenchmarkId::new("sort_compare", len), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| criterion::black_box(sorted_anagram(a, b)))
        });
    }
    group.finish();
}

fn bench_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");
    for &len in &[1_000usize, 100_000] {
        let items: Vec<u32> = (0..len as u32).collect();
        group.bench_with_input(BenchmarkId::new("mod_64", len), &items, |bench, items| {
            bench.iter(|| criterion::black_box(group_by_key(items.iter().copied(), |i| i % 64).len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_anagram, bench_group_by);
criterion_main!(benches);
