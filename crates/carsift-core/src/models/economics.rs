use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::ConfigError;

/// Usage and price assumptions feeding the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Economics {
    /// Distance driven per year, km.
    pub annual_km: f64,
    /// Fuel price per litre.
    pub fuel_price: f64,
    /// Home electricity price per kWh.
    pub electricity_price: f64,
}

impl Economics {
    /// Build a validated set of assumptions.
    pub fn new(annual_km: f64, fuel_price: f64, electricity_price: f64) -> Result<Self, ConfigError> {
        let economics = Self {
            annual_km,
            fuel_price,
            electricity_price,
        };
        economics.validate()?;
        Ok(economics)
    }

    /// Check every figure against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("economics.annual_km", self.annual_km, defaults::ANNUAL_KM_RANGE)?;
        check_range("economics.fuel_price", self.fuel_price, defaults::FUEL_PRICE_RANGE)?;
        check_range(
            "economics.electricity_price",
            self.electricity_price,
            defaults::ELECTRICITY_PRICE_RANGE,
        )
    }
}

impl Default for Economics {
    fn default() -> Self {
        Self {
            annual_km: defaults::DEFAULT_ANNUAL_KM,
            fuel_price: defaults::DEFAULT_FUEL_PRICE,
            electricity_price: defaults::DEFAULT_ELECTRICITY_PRICE,
        }
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("{value} is outside [{min}, {max}]"),
        })
    }
}
