use serde::{Deserialize, Serialize};

use super::variant::ExpandedVariant;
use super::weights::{Dimension, WeightProfile};

/// An expanded variant with its derived costs and scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVariant {
    pub variant: ExpandedVariant,
    /// Energy or fuel cost per year.
    pub annual_energy_cost: f64,
    /// Energy cost plus tax, insurance, and maintenance.
    pub total_annual_cost: f64,
    pub acceleration_score: f64,
    pub torque_score: f64,
    /// Subjective performance blended with the torque and acceleration sub-scores.
    pub performance_blended: f64,
    pub cost_score: f64,
    pub total_score: f64,
}

impl ScoredVariant {
    /// The score fed into the weighted sum for one dimension.
    pub fn dimension_score(&self, dimension: Dimension) -> f64 {
        let record = &self.variant.record;
        match dimension {
            Dimension::Cost => self.cost_score,
            Dimension::Performance => self.performance_blended,
            Dimension::Resale => record.resale_score,
            Dimension::Safety => record.safety_score,
            Dimension::Comfort => record.comfort_score,
        }
    }

    /// Weighted contribution of one dimension to `total_score`.
    pub fn contribution(&self, dimension: Dimension, weights: &WeightProfile) -> f64 {
        self.dimension_score(dimension) * f64::from(weights.get(dimension))
    }
}
