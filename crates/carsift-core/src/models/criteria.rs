use serde::{Deserialize, Serialize};

/// All user-chosen constraints for one evaluation request.
///
/// `None` means "no preference" and imposes no constraint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Upper bound on variant price. `None` = unlimited.
    pub max_price: Option<f64>,

    pub brand: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    /// Matched as a case-insensitive substring of the record's primary use.
    pub primary_use: Option<String>,

    pub min_performance_score: Option<f64>,
    pub min_safety_score: Option<f64>,
    pub min_horsepower: Option<f64>,
    /// Litres.
    pub min_cargo_volume: Option<f64>,

    /// Free-text note scanned for intent overrides.
    pub note: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_trim(mut self, trim: impl Into<String>) -> Self {
        self.trim = Some(trim.into());
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Some(body_type.into());
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = Some(transmission.into());
        self
    }

    pub fn with_primary_use(mut self, primary_use: impl Into<String>) -> Self {
        self.primary_use = Some(primary_use.into());
        self
    }

    pub fn with_min_performance_score(mut self, min: f64) -> Self {
        self.min_performance_score = Some(min);
        self
    }

    pub fn with_min_safety_score(mut self, min: f64) -> Self {
        self.min_safety_score = Some(min);
        self
    }

    pub fn with_min_horsepower(mut self, min: f64) -> Self {
        self.min_horsepower = Some(min);
        self
    }

    pub fn with_min_cargo_volume(mut self, min: f64) -> Self {
        self.min_cargo_volume = Some(min);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
