use carsift_catalog::{expand, load_catalog_from_reader};
use carsift_core::config::CarsiftConfig;
use carsift_core::models::{Economics, FilterCriteria, WeightProfile};
use carsift_ranking::scoring::{acceleration_scores, cost_scores, torque_scores};
use carsift_ranking::{apply_dissatisfaction, RecommendationEngine};
use proptest::prelude::*;

fn arb_weights() -> impl Strategy<Value = WeightProfile> {
    (1u8..=5, 1u8..=5, 1u8..=5, 1u8..=5, 1u8..=5)
        .prop_map(|(c, p, r, s, k)| WeightProfile::new(c, p, r, s, k).unwrap())
}

fn arb_economics() -> impl Strategy<Value = Economics> {
    (1_000.0..=50_000.0f64, 15.0..=60.0f64, 1.0..=10.0f64)
        .prop_map(|(km, fuel, power)| Economics::new(km, fuel, power).unwrap())
}

proptest! {
    #[test]
    fn ranking_is_sorted_bounded_and_repeatable(
        rows in 1usize..40,
        weights in arb_weights(),
        economics in arb_economics(),
        ceiling in proptest::option::of(500_000.0..4_000_000.0f64),
    ) {
        let csv = test_fixtures::synthetic_catalog_csv(rows);
        let catalog = expand(&load_catalog_from_reader(csv.as_bytes()).unwrap());
        let engine = RecommendationEngine::from_config(&CarsiftConfig::default()).unwrap();
        let criteria = FilterCriteria { max_price: ceiling, ..FilterCriteria::default() };

        let first = engine.evaluate(&catalog, &criteria, &weights, &economics);
        let second = engine.evaluate(&catalog, &criteria, &weights, &economics);
        prop_assert_eq!(&first, &second);

        if let Some(ranked) = first.ranked() {
            prop_assert!(ranked.len() <= engine.top_n());
            prop_assert!(ranked.variants.windows(2).all(|w| w[0].total_score >= w[1].total_score));
            for scored in &ranked.variants {
                prop_assert!(ceiling.is_none_or(|c| scored.variant.record.price <= c));
                prop_assert!((0.5..=5.0).contains(&scored.acceleration_score));
                prop_assert!((1.0..=5.0).contains(&scored.performance_blended));
                prop_assert!((0.0..=5.0).contains(&scored.cost_score));
            }
        }
    }

    #[test]
    fn sub_score_vectors_stay_in_range(values in prop::collection::vec(0.0..10_000.0f64, 0..30)) {
        for s in torque_scores(&values) {
            prop_assert!(s > 0.0 && s <= 5.0);
        }
        for s in acceleration_scores(&values) {
            prop_assert!((0.5..=5.0).contains(&s));
        }
        for s in cost_scores(&values) {
            prop_assert!((0.0..=5.0).contains(&s));
        }
    }

    #[test]
    fn feedback_never_exceeds_maximum(weights in arb_weights(), index in 0usize..100) {
        let (after, _) = apply_dissatisfaction(weights, index);
        let mut raised = 0;
        for dimension in carsift_core::models::Dimension::ALL {
            prop_assert!((1..=5).contains(&after.get(dimension)));
            prop_assert!(after.get(dimension) >= weights.get(dimension));
            raised += after.get(dimension) - weights.get(dimension);
        }
        prop_assert!(raised <= 1);
    }
}
