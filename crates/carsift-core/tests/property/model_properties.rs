use carsift_core::models::{Dimension, Propulsion, WeightProfile};
use proptest::prelude::*;

proptest! {
    #[test]
    fn weights_accept_exactly_one_to_five(w in 0u8..=10) {
        prop_assert_eq!(WeightProfile::uniform(w).is_ok(), (1..=5).contains(&w));
    }

    #[test]
    fn with_weight_touches_one_dimension(index in 0usize..20, w in 1u8..=5) {
        let dimension = Dimension::from_index(index);
        let profile = WeightProfile::default().with_weight(dimension, w).unwrap();
        for other in Dimension::ALL {
            let expected = if other == dimension { w } else { 3 };
            prop_assert_eq!(profile.get(other), expected);
        }
    }

    #[test]
    fn propulsion_ignores_case_and_padding(fuel in prop_oneof![
        Just("Electric"), Just("Elektrikli"), Just("Plug-in Hybrid"),
        Just("PHEV"), Just("LPG"), Just("Diesel"),
    ], pad in " {0,3}") {
        let padded = format!("{pad}{}{pad}", fuel.to_uppercase());
        prop_assert_eq!(Propulsion::classify(&padded), Propulsion::classify(fuel));
    }
}
