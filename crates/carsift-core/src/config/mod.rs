//! Engine configuration, loaded from TOML. Every section falls back to defaults.

pub mod catalog_config;
pub mod cost_config;
pub mod defaults;
pub mod intent_config;
pub mod observability_config;
pub mod ranking_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalog_config::CatalogConfig;
pub use cost_config::CostConfig;
pub use intent_config::IntentConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;

use crate::errors::ConfigError;
use crate::models::Economics;

const INLINE_SOURCE: &str = "<inline>";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarsiftConfig {
    pub catalog: CatalogConfig,
    pub economics: Economics,
    pub cost: CostConfig,
    pub ranking: RankingConfig,
    pub intent: IntentConfig,
    pub observability: ObservabilityConfig,
}

impl CarsiftConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, INLINE_SOURCE)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: display.clone(),
            },
            _ => ConfigError::ParseError {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;
        Self::parse(&content, &display)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.economics.validate()?;

        if self.ranking.top_n == 0 {
            return Err(invalid("ranking.top_n", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.cost.phev_electric_share) {
            return Err(invalid("cost.phev_electric_share", "must be within [0, 1]"));
        }
        if !is_non_negative(self.cost.phev_default_kwh_per_100km) {
            return Err(invalid("cost.phev_default_kwh_per_100km", "must be non-negative"));
        }
        if !is_non_negative(self.cost.lpg_price_factor) {
            return Err(invalid("cost.lpg_price_factor", "must be non-negative"));
        }
        if self.intent.currency_code.trim().is_empty() {
            return Err(invalid("intent.currency_code", "must not be empty"));
        }
        if !is_non_negative(self.intent.cargo_min_litres) {
            return Err(invalid("intent.cargo_min_litres", "must be non-negative"));
        }
        Ok(())
    }

    fn parse(toml_str: &str, source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
