use serde::{Deserialize, Serialize};

use super::vehicle::VehicleRecord;

/// Synthesized trim level applied during catalog expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrimTier {
    Entry,
    Mid,
    Full,
}

impl TrimTier {
    /// Expansion order. Every base record yields one variant per tier, in this order.
    pub const ALL: [TrimTier; 3] = [TrimTier::Entry, TrimTier::Mid, TrimTier::Full];

    /// Factor applied to price, annual tax, and annual insurance.
    pub fn price_multiplier(self) -> f64 {
        match self {
            Self::Entry => 0.85,
            Self::Mid => 1.0,
            Self::Full => 1.15,
        }
    }

    /// Added to the equipment and comfort scores before clamping.
    pub fn score_delta(self) -> f64 {
        match self {
            Self::Entry => -0.15,
            Self::Mid => 0.0,
            Self::Full => 0.15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Mid => "Mid",
            Self::Full => "Full",
        }
    }
}

impl std::fmt::Display for TrimTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A trim-level instance of a base record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedVariant {
    /// Position of the base record in the loaded catalog.
    pub base_index: usize,
    pub tier: TrimTier,
    /// The derived record. Price, trim, equipment/comfort scores, tax, and
    /// insurance already reflect the tier.
    pub record: VehicleRecord,
}
