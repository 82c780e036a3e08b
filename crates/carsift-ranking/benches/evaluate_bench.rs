use criterion::{criterion_group, criterion_main, Criterion};

use carsift_catalog::{expand, load_catalog_from_reader};
use carsift_core::config::CarsiftConfig;
use carsift_core::models::{Economics, FilterCriteria, WeightProfile};
use carsift_ranking::RecommendationEngine;

fn bench_evaluate_1k_rows(c: &mut Criterion) {
    let csv = test_fixtures::synthetic_catalog_csv(1_000);
    let catalog = expand(&load_catalog_from_reader(csv.as_bytes()).unwrap());
    assert_eq!(catalog.len(), 3_000);
    let engine = RecommendationEngine::from_config(&CarsiftConfig::default()).unwrap();
    let weights = WeightProfile::default();
    let economics = Economics::default();
    let criteria = FilterCriteria::new().with_note("2 milyon TL, geniş bagaj");

    c.bench_function("evaluate_3k_variants", |b| {
        b.iter(|| engine.evaluate(&catalog, &criteria, &weights, &economics));
    });
}

fn bench_load_and_expand(c: &mut Criterion) {
    let csv = test_fixtures::synthetic_catalog_csv(1_000);

    c.bench_function("load_and_expand_1k_rows", |b| {
        b.iter(|| expand(&load_catalog_from_reader(csv.as_bytes()).unwrap()));
    });
}

criterion_group!(benches, bench_evaluate_1k_rows, bench_load_and_expand);
criterion_main!(benches);
