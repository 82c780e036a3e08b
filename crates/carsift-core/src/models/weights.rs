use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::constants::{DIMENSION_COUNT, WEIGHT_MAX, WEIGHT_MIN};
use crate::errors::ConfigError;

/// A scoring dimension the user can weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Cost,
    Performance,
    Resale,
    Safety,
    Comfort,
}

impl Dimension {
    /// Canonical order. Feedback indices refer to positions in this array.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Cost,
        Dimension::Performance,
        Dimension::Resale,
        Dimension::Safety,
        Dimension::Comfort,
    ];

    /// Dimension at `index`, wrapping around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % DIMENSION_COUNT]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Performance => "performance",
            Self::Resale => "resale",
            Self::Safety => "safety",
            Self::Comfort => "comfort",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Importance weights, each an integer in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct WeightProfile {
    weights: [u8; DIMENSION_COUNT],
}

impl WeightProfile {
    /// Build a profile, rejecting weights outside `[1, 5]`.
    pub fn new(
        cost: u8,
        performance: u8,
        resale: u8,
        safety: u8,
        comfort: u8,
    ) -> Result<Self, ConfigError> {
        let weights = [cost, performance, resale, safety, comfort];
        for (dimension, weight) in Dimension::ALL.iter().zip(weights) {
            check_weight(*dimension, weight)?;
        }
        Ok(Self { weights })
    }

    /// Same weight on every dimension.
    pub fn uniform(weight: u8) -> Result<Self, ConfigError> {
        Self::new(weight, weight, weight, weight, weight)
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        self.weights[position(dimension)]
    }

    /// Copy of this profile with one weight replaced.
    pub fn with_weight(mut self, dimension: Dimension, weight: u8) -> Result<Self, ConfigError> {
        check_weight(dimension, weight)?;
        self.weights[position(dimension)] = weight;
        Ok(self)
    }

    pub fn cost(&self) -> u8 {
        self.get(Dimension::Cost)
    }

    pub fn performance(&self) -> u8 {
        self.get(Dimension::Performance)
    }

    pub fn resale(&self) -> u8 {
        self.get(Dimension::Resale)
    }

    pub fn safety(&self) -> u8 {
        self.get(Dimension::Safety)
    }

    pub fn comfort(&self) -> u8 {
        self.get(Dimension::Comfort)
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self {
            weights: [defaults::DEFAULT_WEIGHT; DIMENSION_COUNT],
        }
    }
}

fn position(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Cost => 0,
        Dimension::Performance => 1,
        Dimension::Resale => 2,
        Dimension::Safety => 3,
        Dimension::Comfort => 4,
    }
}

fn check_weight(dimension: Dimension, weight: u8) -> Result<(), ConfigError> {
    if (WEIGHT_MIN..=WEIGHT_MAX).contains(&weight) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: format!("weights.{dimension}"),
            message: format!("{weight} is outside [{WEIGHT_MIN}, {WEIGHT_MAX}]"),
        })
    }
}

/// Serialized shape: a table keyed by dimension name.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawWeights {
    cost: u8,
    performance: u8,
    resale: u8,
    safety: u8,
    comfort: u8,
}

impl Default for RawWeights {
    fn default() -> Self {
        WeightProfile::default().into()
    }
}

impl TryFrom<RawWeights> for WeightProfile {
    type Error = ConfigError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.cost, raw.performance, raw.resale, raw.safety, raw.comfort)
    }
}

impl From<WeightProfile> for RawWeights {
    fn from(profile: WeightProfile) -> Self {
        Self {
            cost: profile.cost(),
            performance: profile.performance(),
            resale: profile.resale(),
            safety: profile.safety(),
            comfort: profile.comfort(),
        }
    }
}
