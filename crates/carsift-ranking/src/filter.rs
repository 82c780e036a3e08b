//! Conjunctive filtering of expanded variants.

use carsift_core::models::{ExpandedVariant, FilterCriteria, VehicleRecord};

/// Variants satisfying every active constraint, in catalog order.
pub fn filter<'a>(variants: &'a [ExpandedVariant], criteria: &FilterCriteria) -> Vec<&'a ExpandedVariant> {
    variants
        .iter()
        .filter(|variant| matches(&variant.record, criteria))
        .collect()
}

/// Whether one record passes all of `criteria`. Unset fields always pass.
pub fn matches(record: &VehicleRecord, criteria: &FilterCriteria) -> bool {
    criteria.max_price.is_none_or(|ceiling| record.price <= ceiling)
        && equals(&criteria.brand, &record.brand)
        && equals(&criteria.model, &record.model)
        && equals(&criteria.trim, &record.trim)
        && equals(&criteria.body_type, &record.body_type)
        && equals(&criteria.fuel_type, &record.fuel_type)
        && equals(&criteria.transmission, &record.transmission)
        && criteria
            .primary_use
            .as_deref()
            .is_none_or(|wanted| contains_ignore_case(&record.primary_use, wanted))
        && at_least(criteria.min_performance_score, record.performance_score)
        && at_least(criteria.min_safety_score, record.safety_score)
        && at_least(criteria.min_horsepower, record.horsepower)
        && at_least(criteria.min_cargo_volume, record.cargo_volume)
}

fn equals(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().is_none_or(|w| w == actual)
}

fn at_least(minimum: Option<f64>, actual: f64) -> bool {
    minimum.is_none_or(|min| actual >= min)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
