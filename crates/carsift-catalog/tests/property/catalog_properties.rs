use carsift_catalog::loader::parse_or_zero;
use carsift_catalog::{expand, load_catalog_from_reader, Catalog};
use carsift_core::models::{TrimTier, VehicleRecord};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = VehicleRecord> {
    (
        prop_oneof![Just(""), Just("Fiat"), Just("Skoda")],
        prop_oneof![Just(""), Just("Egea"), Just("Octavia")],
        prop_oneof![Just(0.0), 1.0..5_000_000.0f64],
        1.0..=5.0f64,
        1.0..=5.0f64,
        0.0..20_000.0f64,
        0.0..60_000.0f64,
    )
        .prop_map(
            |(brand, model, price, equipment, comfort, tax, insurance)| VehicleRecord {
                brand: brand.to_string(),
                model: model.to_string(),
                trim: "1.5 \"Style\" (old)".to_string(),
                price,
                equipment_score: equipment,
                comfort_score: comfort,
                annual_tax: tax,
                annual_insurance: insurance,
                ..Default::default()
            },
        )
}

proptest! {
    #[test]
    fn expansion_is_three_per_eligible_record(records in prop::collection::vec(arb_record(), 0..40)) {
        let catalog = Catalog::new(records);
        let expanded = expand(&catalog);
        prop_assert_eq!(expanded.len(), 3 * catalog.eligible_count());
        prop_assert_eq!(expanded.base_count(), catalog.eligible_count());
    }

    #[test]
    fn tier_figures_derive_from_base(records in prop::collection::vec(arb_record(), 1..20)) {
        let catalog = Catalog::new(records);
        for variant in expand(&catalog).variants() {
            let base = &catalog.records()[variant.base_index];
            let m = variant.tier.price_multiplier();
            prop_assert!((variant.record.price - base.price * m).abs() < 1e-6);
            prop_assert_eq!(variant.record.annual_tax, (base.annual_tax * m).trunc());
            prop_assert_eq!(variant.record.annual_insurance, (base.annual_insurance * m).trunc());
            let suffix = format!("({})", variant.tier);
            prop_assert!(variant.record.trim.ends_with(&suffix));
            prop_assert!(!variant.record.trim.contains('"'));
        }
    }

    #[test]
    fn adjusted_scores_stay_in_range(records in prop::collection::vec(arb_record(), 1..20)) {
        for variant in expand(&Catalog::new(records)).variants() {
            prop_assert!((1.0..=5.0).contains(&variant.record.equipment_score));
            prop_assert!((1.0..=5.0).contains(&variant.record.comfort_score));
        }
    }

    #[test]
    fn tier_prices_are_ordered(records in prop::collection::vec(arb_record(), 1..20)) {
        let expanded = expand(&Catalog::new(records));
        for chunk in expanded.variants().chunks(TrimTier::ALL.len()) {
            prop_assert!(chunk[0].record.price < chunk[1].record.price);
            prop_assert!(chunk[1].record.price < chunk[2].record.price);
        }
    }

    #[test]
    fn parse_or_zero_never_negative_or_nan(s in ".{0,20}") {
        let value = parse_or_zero(&s);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    #[test]
    fn synthetic_catalogs_load_completely(rows in 0usize..60) {
        let csv = test_fixtures::synthetic_catalog_csv(rows);
        let catalog = load_catalog_from_reader(csv.as_bytes()).unwrap();
        prop_assert_eq!(catalog.len(), rows);
        prop_assert_eq!(catalog.eligible_count(), rows);
    }
}
