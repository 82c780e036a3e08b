//! Propulsion classification from the catalog's free-form fuel type.

use serde::{Deserialize, Serialize};

const ELECTRIC_ALIASES: &[&str] = &["electric", "elektrikli", "bev", "ev"];
const PLUG_IN_HYBRID_ALIASES: &[&str] = &[
    "plug-in hybrid",
    "plug-in hibrit",
    "plugin hybrid",
    "phev",
];
const LPG_ALIASES: &[&str] = &["lpg"];

/// How a vehicle's energy cost is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Propulsion {
    Electric,
    PlugInHybrid,
    Lpg,
    /// Gasoline, diesel, conventional hybrid, and anything unrecognized.
    Combustion,
}

impl Propulsion {
    /// Classify a fuel-type string. Matching is exact after trimming and
    /// lowercasing; unknown values are treated as combustion.
    pub fn classify(fuel_type: &str) -> Self {
        let normalized = fuel_type.trim().to_lowercase();
        let key = normalized.as_str();
        if ELECTRIC_ALIASES.contains(&key) {
            Self::Electric
        } else if PLUG_IN_HYBRID_ALIASES.contains(&key) {
            Self::PlugInHybrid
        } else if LPG_ALIASES.contains(&key) {
            Self::Lpg
        } else {
            Self::Combustion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_aliases_case_insensitively() {
        assert_eq!(Propulsion::classify("Elektrikli"), Propulsion::Electric);
        assert_eq!(Propulsion::classify(" ELECTRIC "), Propulsion::Electric);
        assert_eq!(Propulsion::classify("Plug-in Hibrit"), Propulsion::PlugInHybrid);
        assert_eq!(Propulsion::classify("PHEV"), Propulsion::PlugInHybrid);
        assert_eq!(Propulsion::classify("lpg"), Propulsion::Lpg);
    }

    #[test]
    fn unknown_and_conventional_fall_back_to_combustion() {
        assert_eq!(Propulsion::classify("Diesel"), Propulsion::Combustion);
        assert_eq!(Propulsion::classify("Hybrid"), Propulsion::Combustion);
        assert_eq!(Propulsion::classify(""), Propulsion::Combustion);
    }
}
