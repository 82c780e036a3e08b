//! "Not satisfied" feedback: bump one importance weight.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use carsift_core::constants::{DIMENSION_COUNT, WEIGHT_MAX};
use carsift_core::models::{Dimension, WeightProfile};

/// What a dissatisfaction signal did to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackOutcome {
    /// The weight on this dimension went up by one.
    Raised { dimension: Dimension, weight: u8 },
    /// The chosen weight was already at its maximum; nothing changed.
    AlreadyAtMaximum { dimension: Dimension },
}

impl FeedbackOutcome {
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Raised { dimension, .. } | Self::AlreadyAtMaximum { dimension } => *dimension,
        }
    }
}

/// Raise the weight at `index` (taken modulo the dimension count) by one.
///
/// Pure: the same profile and index always give the same result.
pub fn apply_dissatisfaction(profile: WeightProfile, index: usize) -> (WeightProfile, FeedbackOutcome) {
    let dimension = Dimension::from_index(index);
    let current = profile.get(dimension);
    if current >= WEIGHT_MAX {
        debug!(%dimension, "feedback ignored, weight already at maximum");
        return (profile, FeedbackOutcome::AlreadyAtMaximum { dimension });
    }

    let weight = current + 1;
    match profile.with_weight(dimension, weight) {
        Ok(raised) => {
            debug!(%dimension, weight, "feedback raised weight");
            (raised, FeedbackOutcome::Raised { dimension, weight })
        }
        Err(_) => (profile, FeedbackOutcome::AlreadyAtMaximum { dimension }),
    }
}

/// Draw the dimension index a dissatisfaction signal applies to.
pub fn random_dimension<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..DIMENSION_COUNT)
}
