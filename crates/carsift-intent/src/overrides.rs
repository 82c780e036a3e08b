use serde::Serialize;

use carsift_core::models::FilterCriteria;

/// A human-readable record of one override taken from the note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IntentNotice {
    /// The note named a budget below the current ceiling, or no ceiling was set.
    BudgetLowered { amount: f64 },
    /// The note named a body type and none was chosen.
    BodyTypeDetected { body_type: String },
    /// The note named a fuel type and none was chosen.
    FuelTypeDetected { fuel_type: String },
    /// The note asked for cargo space; the cargo minimum was raised.
    CargoMinimumRaised { litres: f64 },
}

impl std::fmt::Display for IntentNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BudgetLowered { amount } => write!(
                f,
                "budget from the note ({amount:.0}) applied as the price ceiling"
            ),
            Self::BodyTypeDetected { body_type } => {
                write!(f, "body type '{body_type}' detected in the note and applied")
            }
            Self::FuelTypeDetected { fuel_type } => {
                write!(f, "fuel type '{fuel_type}' detected in the note and applied")
            }
            Self::CargoMinimumRaised { litres } => write!(
                f,
                "note asks for cargo space; minimum cargo volume raised to {litres:.0} l"
            ),
        }
    }
}

/// Filter changes derived from a note. Every field only ever tightens.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IntentOverrides {
    pub max_price: Option<f64>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub min_cargo_volume: Option<f64>,
    pub notices: Vec<IntentNotice>,
}

impl IntentOverrides {
    pub fn is_empty(&self) -> bool {
        self.max_price.is_none()
            && self.body_type.is_none()
            && self.fuel_type.is_none()
            && self.min_cargo_volume.is_none()
    }

    /// Criteria with these overrides laid on top.
    pub fn apply(&self, criteria: &FilterCriteria) -> FilterCriteria {
        let mut effective = criteria.clone();
        if let Some(max_price) = self.max_price {
            effective.max_price = Some(max_price);
        }
        if let Some(body_type) = &self.body_type {
            effective.body_type = Some(body_type.clone());
        }
        if let Some(fuel_type) = &self.fuel_type {
            effective.fuel_type = Some(fuel_type.clone());
        }
        if let Some(min_cargo) = self.min_cargo_volume {
            effective.min_cargo_volume = Some(min_cargo);
        }
        effective
    }
}
