use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use prime_patterns::algs::gaps::analyze_gaps;
use prime_patterns::algs::race::compute_bias_series;
use prime_patterns::algs::spiral::generate_spiral_coordinates;
use prime_patterns::sieve::generate_primes;

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    for &n in &[10_000u64, 1_000_000u64] {
        group.bench_with_input(BenchmarkId::new("sieve", n), &n, |b, &n| {
            b.iter(|| black_box(generate_primes(n)));
        });

        let primes = generate_primes(n);
        group.bench_with_input(BenchmarkId::new("gaps", n), &primes, |b, primes| {
            b.iter(|| black_box(analyze_gaps(primes)));
        });
        group.bench_with_input(BenchmarkId::new("race", n), &primes, |b, primes| {
            b.iter(|| black_box(compute_bias_series(primes)));
        });
    }

    for &count in &[10_000usize, 250_000usize] {
        group.bench_with_input(BenchmarkId::new("spiral", count), &count, |b, &count| {
            b.iter(|| black_box(generate_spiral_coordinates(count)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_components);
criterion_main!(benches);
