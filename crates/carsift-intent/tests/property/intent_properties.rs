use carsift_core::config::IntentConfig;
use carsift_core::models::FilterCriteria;
use carsift_intent::IntentExtractor;
use proptest::prelude::*;

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::option::of(1_000.0..5_000_000.0f64),
        proptest::option::of(prop_oneof![Just("SUV"), Just("Sedan")]),
        proptest::option::of(0.0..1_000.0f64),
    )
        .prop_map(|(max_price, body_type, min_cargo)| FilterCriteria {
            max_price,
            body_type: body_type.map(str::to_string),
            min_cargo_volume: min_cargo,
            ..FilterCriteria::default()
        })
}

proptest! {
    #[test]
    fn extraction_never_loosens(note in ".{0,80}", criteria in arb_criteria()) {
        let extractor = IntentExtractor::new(&IntentConfig::default()).unwrap();
        let effective = extractor.extract(&note, &criteria).apply(&criteria);

        if let Some(ceiling) = criteria.max_price {
            prop_assert!(effective.max_price.is_some_and(|p| p <= ceiling));
        }
        if criteria.body_type.is_some() {
            prop_assert_eq!(&effective.body_type, &criteria.body_type);
        }
        if let Some(min) = criteria.min_cargo_volume {
            prop_assert!(effective.min_cargo_volume.is_some_and(|c| c >= min));
        }
    }

    #[test]
    fn budget_figures_round_trip_through_units(amount in 1u64..10_000) {
        let extractor = IntentExtractor::new(&IntentConfig::default()).unwrap();
        let note = format!("{amount} bin TL");
        let overrides = extractor.extract(&note, &FilterCriteria::new());
        prop_assert_eq!(overrides.max_price, Some((amount * 1_000) as f64));
    }

    #[test]
    fn extraction_is_deterministic(note in ".{0,80}") {
        let extractor = IntentExtractor::new(&IntentConfig::default()).unwrap();
        let criteria = FilterCriteria::new();
        prop_assert_eq!(extractor.extract(&note, &criteria), extractor.extract(&note, &criteria));
    }
}
