//! Test fixtures for carsift: catalog CSV files, a record builder, and a
//! synthetic catalog generator for benchmarks.
//!
//! Helpers panic on failure; they are only meant for tests and benches.

use std::path::PathBuf;

use carsift_core::constants::REQUIRED_COLUMNS;
use carsift_core::models::VehicleRecord;

/// The main sample catalog: 12 rows, 10 of them eligible for expansion.
pub const SAMPLE_CATALOG: &str = "catalogs/sample.csv";
/// Same schema as the sample, minus the torque column.
pub const MISSING_TORQUE_CATALOG: &str = "catalogs/missing_torque.csv";
/// A row with one field more than the header.
pub const EXTRA_FIELDS_CATALOG: &str = "catalogs/extra_fields.csv";
/// One row, columns in reverse order.
pub const REORDERED_CATALOG: &str = "catalogs/reordered.csv";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist or isn't UTF-8.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// List all CSV files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "csv").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Builder for hand-made records in unit tests.
///
/// Starts from a plain mid-range gasoline sedan with every score at 3.
#[derive(Debug, Clone)]
pub struct VehicleBuilder {
    record: VehicleRecord,
}

impl VehicleBuilder {
    pub fn new(brand: &str, model: &str) -> Self {
        Self {
            record: VehicleRecord {
                brand: brand.to_string(),
                model: model.to_string(),
                trim: "1.5 Base".to_string(),
                price: 1_000_000.0,
                equipment_score: 3.0,
                safety_score: 3.0,
                performance_score: 3.0,
                comfort_score: 3.0,
                resale_score: 3.0,
                annual_tax: 5_000.0,
                annual_insurance: 15_000.0,
                annual_maintenance: 6_000.0,
                fuel_consumption: 6.0,
                horsepower: 120.0,
                torque: 200.0,
                acceleration: 10.0,
                body_length: 4_500.0,
                cargo_volume: 450.0,
                body_type: "Sedan".to_string(),
                fuel_type: "Gasoline".to_string(),
                transmission: "Automatic".to_string(),
                primary_use: "Family".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn trim(mut self, trim: &str) -> Self {
        self.record.trim = trim.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.record.price = price;
        self
    }

    pub fn scores(mut self, safety: f64, performance: f64, comfort: f64, resale: f64) -> Self {
        self.record.safety_score = safety;
        self.record.performance_score = performance;
        self.record.comfort_score = comfort;
        self.record.resale_score = resale;
        self
    }

    pub fn equipment(mut self, equipment: f64) -> Self {
        self.record.equipment_score = equipment;
        self
    }

    /// Tax, insurance, and maintenance.
    pub fn fixed_costs(mut self, tax: f64, insurance: f64, maintenance: f64) -> Self {
        self.record.annual_tax = tax;
        self.record.annual_insurance = insurance;
        self.record.annual_maintenance = maintenance;
        self
    }

    pub fn fuel(mut self, fuel_type: &str, litres_per_100km: f64) -> Self {
        self.record.fuel_type = fuel_type.to_string();
        self.record.fuel_consumption = litres_per_100km;
        self
    }

    pub fn electric(mut self, kwh_per_100km: f64) -> Self {
        self.record.electric_consumption = kwh_per_100km;
        self
    }

    pub fn power(mut self, horsepower: f64, torque: f64, acceleration: f64) -> Self {
        self.record.horsepower = horsepower;
        self.record.torque = torque;
        self.record.acceleration = acceleration;
        self
    }

    pub fn body(mut self, body_type: &str, cargo_volume: f64) -> Self {
        self.record.body_type = body_type.to_string();
        self.record.cargo_volume = cargo_volume;
        self
    }

    pub fn transmission(mut self, transmission: &str) -> Self {
        self.record.transmission = transmission.to_string();
        self
    }

    pub fn primary_use(mut self, primary_use: &str) -> Self {
        self.record.primary_use = primary_use.to_string();
        self
    }

    pub fn build(self) -> VehicleRecord {
        self.record
    }
}

/// A well-formed catalog CSV with `rows` generated records, for benches and
/// property tests. Deterministic for a given row count.
pub fn synthetic_catalog_csv(rows: usize) -> String {
    const BRANDS: [&str; 6] = ["Fiat", "Renault", "Toyota", "Hyundai", "Skoda", "Tesla"];
    const BODIES: [&str; 4] = ["Sedan", "Hatchback", "SUV", "Station Wagon"];
    const FUELS: [&str; 6] = ["Gasoline", "Diesel", "Hybrid", "LPG", "Electric", "Plug-in Hybrid"];

    let mut out = REQUIRED_COLUMNS.join(",");
    out.push('\n');
    for i in 0..rows {
        let fuel = FUELS[i % FUELS.len()];
        let electric = matches!(fuel, "Electric" | "Plug-in Hybrid");
        let score = |offset: usize| 1 + (i + offset) % 5;
        let mut fields: Vec<String> = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for column in REQUIRED_COLUMNS {
            let value = match column {
                "marka" => BRANDS[i % BRANDS.len()].to_string(),
                "model" => format!("Model {}", i / BRANDS.len()),
                "motor_donanim" => format!("{}.{} Trim", 1 + i % 2, i % 10),
                "fiyat_tl" => (800_000 + (i * 37_000) % 2_400_000).to_string(),
                "donanim_skor" => score(0).to_string(),
                "guvenlik_skor" => score(1).to_string(),
                "performans_skor" => score(2).to_string(),
                "konfor_skor" => score(3).to_string(),
                "ikinci_el_skor" => score(4).to_string(),
                "tuketim_kwh" if electric => format!("{}", 14 + i % 6),
                "ev_sarj_tl" if electric => "100".to_string(),
                "yillik_mtv" => (3_000 + (i * 113) % 9_000).to_string(),
                "yillik_sigorta" => (12_000 + (i * 571) % 30_000).to_string(),
                "yillik_bakim" => (4_000 + (i * 97) % 6_000).to_string(),
                "ortalama_tuketim" if fuel != "Electric" => {
                    format!("{:.1}", 4.0 + (i % 40) as f64 / 10.0)
                }
                "beygir_gucu" => (90 + (i * 7) % 300).to_string(),
                "tork_nm" => (120 + (i * 11) % 500).to_string(),
                "hizlanma_0_100s" => format!("{:.1}", 5.0 + (i % 90) as f64 / 10.0),
                "elektrikli_menzil_km" if electric => (50 + (i * 13) % 500).to_string(),
                "gövde_uzunlugu_mm" => (3_900 + (i * 17) % 1_000).to_string(),
                "bagaj_hacmi_lt" => (300 + (i * 19) % 500).to_string(),
                "kasa_tipi" => BODIES[i % BODIES.len()].to_string(),
                "yakit_tipi" => fuel.to_string(),
                "sanziman" => (if i % 3 == 0 { "Manual" } else { "Automatic" }).to_string(),
                "kullanim_amaci" => "\"City, Family\"".to_string(),
                _ => "0".to_string(),
            };
            fields.push(value);
        }
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_catalog_files_exist() {
        for f in [
            SAMPLE_CATALOG,
            MISSING_TORQUE_CATALOG,
            EXTRA_FIELDS_CATALOG,
            REORDERED_CATALOG,
        ] {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
        assert_eq!(list_fixtures("catalogs").len(), 4);
    }

    #[test]
    fn synthetic_catalog_has_header_and_rows() {
        let csv = synthetic_catalog_csv(25);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 26);
        assert!(lines[0].starts_with("model,marka,"));
    }

    #[test]
    fn builder_defaults_are_eligible() {
        let record = VehicleBuilder::new("Fiat", "Egea").build();
        assert!(record.is_eligible());
        assert_eq!(record.display_name(), "Fiat Egea 1.5 Base");
    }
}
