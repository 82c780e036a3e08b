//! Trim-tier expansion: every eligible base record becomes three variants.

use tracing::debug;

use carsift_core::constants::{SCORE_MAX, SCORE_MIN};
use carsift_core::models::{ExpandedVariant, TrimTier, VehicleRecord};

use crate::catalog::{Catalog, ExpandedCatalog};

/// Expand every eligible record into its Entry, Mid, and Full variants.
///
/// Output order follows the catalog, then the tier order, so ties later in the
/// pipeline resolve the same way on every run.
pub fn expand(catalog: &Catalog) -> ExpandedCatalog {
    let variants: Vec<ExpandedVariant> = catalog
        .eligible()
        .flat_map(|(index, record)| {
            TrimTier::ALL
                .into_iter()
                .map(move |tier| expand_variant(index, record, tier))
        })
        .collect();

    let base_count = variants.len() / TrimTier::ALL.len();
    debug!(
        variants = variants.len(),
        rows_skipped = catalog.len() - base_count,
        "catalog expanded"
    );
    ExpandedCatalog::new(variants, base_count)
}

/// Derive one tier of a base record.
pub fn expand_variant(base_index: usize, base: &VehicleRecord, tier: TrimTier) -> ExpandedVariant {
    let multiplier = tier.price_multiplier();
    let delta = tier.score_delta();

    let record = VehicleRecord {
        price: base.price * multiplier,
        trim: format!("{} ({})", base_trim(&base.trim), tier.label()),
        equipment_score: clamp_score(base.equipment_score + delta),
        comfort_score: clamp_score(base.comfort_score + delta),
        annual_tax: (base.annual_tax * multiplier).trunc(),
        annual_insurance: (base.annual_insurance * multiplier).trunc(),
        ..base.clone()
    };

    ExpandedVariant {
        base_index,
        tier,
        record,
    }
}

/// The trim descriptor without quotes or any parenthesized suffix.
pub fn base_trim(trim: &str) -> String {
    let unquoted = trim.replace('"', "");
    unquoted
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_trim_strips_quotes_and_suffix() {
        assert_eq!(base_trim("1.5 TSI \"Style\" (Mid)"), "1.5 TSI Style");
        assert_eq!(base_trim("  1.6 CRDi  "), "1.6 CRDi");
        assert_eq!(base_trim("(old)"), "");
    }

    #[test]
    fn variant_scales_price_tax_and_insurance() {
        let base = VehicleRecord {
            brand: "Renault".into(),
            model: "Clio".into(),
            trim: "1.0 TCe".into(),
            price: 1_000_000.0,
            annual_tax: 4_999.0,
            annual_insurance: 10_001.0,
            equipment_score: 4.9,
            comfort_score: 1.1,
            ..Default::default()
        };

        let full = expand_variant(7, &base, TrimTier::Full);
        assert_eq!(full.base_index, 7);
        assert!((full.record.price - 1_150_000.0).abs() < 1e-6);
        assert_eq!(full.record.trim, "1.0 TCe (Full)");
        assert_eq!(full.record.annual_tax, 5_748.0);
        assert_eq!(full.record.annual_insurance, 11_501.0);
        assert_eq!(full.record.equipment_score, 5.0);

        let entry = expand_variant(7, &base, TrimTier::Entry);
        assert_eq!(entry.record.comfort_score, 1.0);
        assert_eq!(entry.record.annual_tax, 4_249.0);
    }
}
