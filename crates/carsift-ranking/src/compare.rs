//! Side-by-side comparison of ranked variants.

use std::collections::BTreeSet;

use serde::Serialize;

use carsift_core::constants::MAX_COMPARED_VARIANTS;
use carsift_core::models::ScoredVariant;

use crate::evaluation::RankedList;

/// One cell of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComparisonValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for ComparisonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n:.2}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// One attribute across every compared variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<ComparisonValue>,
}

/// Compared variants as columns, attributes as rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// `brand model trim` per column.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
    /// More variants were selected than fit; the extras were left out.
    pub truncated: bool,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

type Extract = fn(&ScoredVariant) -> ComparisonValue;

const ROWS: [(&str, Extract); 11] = [
    ("Price", |s| ComparisonValue::Number(s.variant.record.price)),
    ("Annual ownership cost", |s| ComparisonValue::Number(s.total_annual_cost)),
    ("Fuel type", |s| ComparisonValue::Text(s.variant.record.fuel_type.clone())),
    ("Horsepower", |s| ComparisonValue::Number(s.variant.record.horsepower)),
    ("Torque (Nm)", |s| ComparisonValue::Number(s.variant.record.torque)),
    ("0-100 (s)", |s| ComparisonValue::Number(s.variant.record.acceleration)),
    ("Cargo (l)", |s| ComparisonValue::Number(s.variant.record.cargo_volume)),
    ("Safety", |s| ComparisonValue::Number(s.variant.record.safety_score)),
    ("Performance", |s| ComparisonValue::Number(s.performance_blended)),
    ("Comfort", |s| ComparisonValue::Number(s.variant.record.comfort_score)),
    ("Resale", |s| ComparisonValue::Number(s.variant.record.resale_score)),
];

/// Compare the ranked entries at `selected_positions`.
///
/// Positions are read in ranking order; duplicates and out-of-range positions
/// are dropped. At most three variants are compared.
pub fn compare(ranked: &RankedList, selected_positions: &[usize]) -> Comparison {
    let valid: BTreeSet<usize> = selected_positions
        .iter()
        .copied()
        .filter(|&p| p < ranked.variants.len())
        .collect();
    let truncated = valid.len() > MAX_COMPARED_VARIANTS;
    let chosen: Vec<&ScoredVariant> = valid
        .into_iter()
        .take(MAX_COMPARED_VARIANTS)
        .map(|p| &ranked.variants[p])
        .collect();

    Comparison {
        columns: chosen.iter().map(|s| s.variant.record.display_name()).collect(),
        rows: ROWS
            .iter()
            .map(|&(label, extract)| ComparisonRow {
                label,
                values: chosen.iter().map(|&s| extract(s)).collect(),
            })
            .collect(),
        truncated,
    }
}
