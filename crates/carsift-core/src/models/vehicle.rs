use serde::{Deserialize, Serialize};

/// One row of the base catalog.
///
/// Numeric fields are never negative; a missing value is stored as `0.0`.
/// Text fields are trimmed, with the empty string standing in for "missing".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    /// Engine/hardware descriptor, e.g. `1.5 TSI Style`.
    pub trim: String,
    pub price: f64,

    // Subjective 1-5 scores.
    pub equipment_score: f64,
    pub safety_score: f64,
    pub performance_score: f64,
    pub comfort_score: f64,
    pub resale_score: f64,

    /// kWh/100km.
    pub electric_consumption: f64,
    /// Cost of one full home charge. Carried through, not used in scoring.
    pub home_charge_cost: f64,
    pub annual_tax: f64,
    pub annual_insurance: f64,
    pub annual_maintenance: f64,
    /// L/100km.
    pub fuel_consumption: f64,
    pub horsepower: f64,
    /// Nm.
    pub torque: f64,
    /// 0-100 km/h in seconds.
    pub acceleration: f64,
    /// km.
    pub electric_range: f64,
    /// mm.
    pub body_length: f64,
    /// Litres.
    pub cargo_volume: f64,

    pub body_type: String,
    pub fuel_type: String,
    pub transmission: String,
    pub primary_use: String,
}

impl VehicleRecord {
    /// Whether the record can take part in expansion: it needs an identity and a price.
    pub fn is_eligible(&self) -> bool {
        !self.brand.is_empty() && !self.model.is_empty() && self.price > 0.0
    }

    /// `brand model trim`, for logs and reports.
    pub fn display_name(&self) -> String {
        [self.brand.as_str(), self.model.as_str(), self.trim.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
