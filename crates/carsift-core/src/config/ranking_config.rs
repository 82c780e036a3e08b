use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::WeightProfile;

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of variants kept in the shortlist.
    pub top_n: usize,
    /// Weights used when the caller has not adjusted any.
    pub default_weights: WeightProfile,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_TOP_N,
            default_weights: WeightProfile::default(),
        }
    }
}
