use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use prime_patterns::analysis::Analysis;
use prime_patterns::cache::AnalysisCache;
use prime_patterns::limits::Limits;

fn bench_analysis_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_cache");

    for &bound in &[10_000i64, 500_000i64] {
        group.bench_with_input(
            BenchmarkId::new("analysis_no_cache", bound),
            &bound,
            |b, &bound| {
                let limits = Limits::default();
                b.iter(|| {
                    let out = Analysis::run(bound, &limits);
                    black_box(out);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("analysis_cached", bound),
            &bound,
            |b, &bound| {
                let cache = AnalysisCache::default();
                b.iter(|| {
                    let out = cache.analysis(bound);
                    black_box(out);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analysis_cache);
criterion_main!(benches);
