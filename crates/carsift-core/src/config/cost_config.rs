use serde::{Deserialize, Serialize};

use super::defaults;

/// Assumptions baked into the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Share of a plug-in hybrid's yearly distance driven on electricity (0-1).
    pub phev_electric_share: f64,
    /// kWh/100km assumed for a plug-in hybrid that lists no consumption.
    pub phev_default_kwh_per_100km: f64,
    /// LPG price as a fraction of the fuel price.
    pub lpg_price_factor: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            phev_electric_share: defaults::DEFAULT_PHEV_ELECTRIC_SHARE,
            phev_default_kwh_per_100km: defaults::DEFAULT_PHEV_KWH_PER_100KM,
            lpg_price_factor: defaults::DEFAULT_LPG_PRICE_FACTOR,
        }
    }
}
