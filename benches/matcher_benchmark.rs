use criterion::{criterion_group, criterion_main, Criterion};
use liberty_parks::services::{ParkCatalog, QueryMatcher, SearchQuery};
use std::hint::black_box;

fn benchmark_score_parks(c: &mut Criterion) {
    // Load the catalog once
    let catalog = ParkCatalog::builtin().expect("Failed to load park catalog");
    let matcher = QueryMatcher::default();

    let single = SearchQuery::parse("running").unwrap();
    let mixed = SearchQuery::parse(
        "I want a quiet scenic hike with my dog, then a picnic under a shelter near the water",
    )
    .unwrap();
    // Nothing recognised: general-appeal fallback
    let unknown = SearchQuery::parse("somewhere to read a book").unwrap();

    let mut group = c.benchmark_group("score_parks");

    group.bench_function("single_activity", |b| {
        b.iter(|| matcher.score_parks(black_box(&catalog), black_box(&single)))
    });

    group.bench_function("many_activities", |b| {
        b.iter(|| matcher.score_parks(black_box(&catalog), black_box(&mixed)))
    });

    group.bench_function("fallback", |b| {
        b.iter(|| matcher.score_parks(black_box(&catalog), black_box(&unknown)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_score_parks);
criterion_main!(benches);
