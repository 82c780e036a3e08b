//! Per-variant breakdown of the total score.

use serde::Serialize;

use carsift_core::models::{Dimension, ScoredVariant, WeightProfile};

/// One dimension's share of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub dimension: Dimension,
    /// Sub-score before weighting.
    pub score: f64,
    pub weight: u8,
    /// `score × weight`.
    pub weighted: f64,
}

/// Why a variant scored what it did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub variant: String,
    /// One entry per dimension, largest contribution first.
    pub contributions: Vec<Contribution>,
    pub total_score: f64,
}

impl Explanation {
    pub fn of(scored: &ScoredVariant, weights: &WeightProfile) -> Self {
        let mut contributions: Vec<Contribution> = Dimension::ALL
            .iter()
            .map(|&dimension| Contribution {
                dimension,
                score: scored.dimension_score(dimension),
                weight: weights.get(dimension),
                weighted: scored.contribution(dimension, weights),
            })
            .collect();
        contributions.sort_by(|a, b| b.weighted.total_cmp(&a.weighted));

        Self {
            variant: scored.variant.record.display_name(),
            contributions,
            total_score: scored.total_score,
        }
    }

    /// The dimension contributing most to the total.
    pub fn strongest(&self) -> Option<Dimension> {
        self.contributions.first().map(|c| c.dimension)
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} scored {:.2}", self.variant, self.total_score)?;
        for c in &self.contributions {
            writeln!(
                f,
                "  {:<12} {:.2} x {} = {:.2}",
                c.dimension.name(),
                c.score,
                c.weight,
                c.weighted
            )?;
        }
        Ok(())
    }
}
