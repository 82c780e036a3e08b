//! Annual ownership cost.

use serde::Serialize;

use carsift_core::config::CostConfig;
use carsift_core::models::{Economics, Propulsion, VehicleRecord};

/// Yearly running cost of one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualCost {
    /// Fuel and/or electricity.
    pub energy: f64,
    /// Energy plus tax, insurance, and maintenance.
    pub total: f64,
}

/// Energy and ownership cost by propulsion type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostModel {
    config: CostConfig,
}

impl CostModel {
    pub fn new(config: CostConfig) -> Self {
        Self { config }
    }

    pub fn annual_cost(&self, record: &VehicleRecord, economics: &Economics) -> AnnualCost {
        let energy = self.annual_energy_cost(record, economics);
        let total = energy + record.annual_tax + record.annual_insurance + record.annual_maintenance;
        AnnualCost {
            energy,
            total: total.max(0.0),
        }
    }

    /// Fuel or electricity spend over `economics.annual_km`.
    pub fn annual_energy_cost(&self, record: &VehicleRecord, economics: &Economics) -> f64 {
        let hundreds_km = economics.annual_km / 100.0;
        let cost = match Propulsion::classify(&record.fuel_type) {
            Propulsion::Electric => {
                hundreds_km * record.electric_consumption * economics.electricity_price
            }
            Propulsion::PlugInHybrid if record.electric_range > 0.0 => {
                let share = self.config.phev_electric_share;
                let kwh_per_100km = if record.electric_consumption > 0.0 {
                    record.electric_consumption
                } else {
                    self.config.phev_default_kwh_per_100km
                };
                let electric = hundreds_km * share * kwh_per_100km * economics.electricity_price;
                let fuel = hundreds_km
                    * (1.0 - share)
                    * record.fuel_consumption
                    * economics.fuel_price;
                electric + fuel
            }
            Propulsion::Lpg => {
                hundreds_km
                    * record.fuel_consumption
                    * economics.fuel_price
                    * self.config.lpg_price_factor
            }
            // No electric range: a plug-in hybrid runs on fuel alone.
            Propulsion::PlugInHybrid | Propulsion::Combustion => {
                hundreds_km * record.fuel_consumption * economics.fuel_price
            }
        };
        cost.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economics() -> Economics {
        Economics::new(15_000.0, 40.0, 2.5).unwrap()
    }

    fn record(fuel_type: &str) -> VehicleRecord {
        VehicleRecord {
            fuel_type: fuel_type.into(),
            ..Default::default()
        }
    }

    #[test]
    fn electric_uses_kwh_only() {
        let ev = VehicleRecord {
            electric_consumption: 15.0,
            fuel_consumption: 99.0,
            ..record("Electric")
        };
        assert!((CostModel::default().annual_energy_cost(&ev, &economics()) - 5_625.0).abs() < 1e-9);
    }

    #[test]
    fn plug_in_hybrid_splits_distance() {
        let phev = VehicleRecord {
            electric_range: 50.0,
            electric_consumption: 18.0,
            fuel_consumption: 6.0,
            ..record("Plug-in Hybrid")
        };
        let cost = CostModel::default().annual_energy_cost(&phev, &economics());
        assert!((cost - 25_762.5).abs() < 1e-6, "got {cost}");
    }

    #[test]
    fn plug_in_hybrid_without_consumption_uses_default_kwh() {
        let phev = VehicleRecord {
            electric_range: 40.0,
            fuel_consumption: 6.0,
            ..record("Plug-in Hibrit")
        };
        // 52.5 * 15 * 2.5 + 97.5 * 6 * 40
        let cost = CostModel::default().annual_energy_cost(&phev, &economics());
        assert!((cost - 25_368.75).abs() < 1e-6, "got {cost}");
    }

    #[test]
    fn plug_in_hybrid_without_range_runs_on_fuel() {
        let phev = VehicleRecord {
            electric_consumption: 18.0,
            fuel_consumption: 6.0,
            ..record("PHEV")
        };
        let cost = CostModel::default().annual_energy_cost(&phev, &economics());
        assert!((cost - 36_000.0).abs() < 1e-6);
    }

    #[test]
    fn lpg_is_discounted() {
        let lpg = VehicleRecord {
            fuel_consumption: 10.0,
            ..record("LPG")
        };
        let cost = CostModel::default().annual_energy_cost(&lpg, &economics());
        assert!((cost - 42_000.0).abs() < 1e-6);
    }

    #[test]
    fn total_adds_fixed_costs() {
        let car = VehicleRecord {
            fuel_consumption: 5.0,
            annual_tax: 4_000.0,
            annual_insurance: 12_000.0,
            annual_maintenance: 6_000.0,
            ..record("Diesel")
        };
        let cost = CostModel::default().annual_cost(&car, &economics());
        assert!((cost.energy - 30_000.0).abs() < 1e-6);
        assert!((cost.total - 52_000.0).abs() < 1e-6);
    }
}
