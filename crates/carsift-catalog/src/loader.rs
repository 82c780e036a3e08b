//! Catalog CSV loading and validation.
//!
//! The whole catalog loads or nothing does: a missing column or a broken row
//! fails the call. Individual numeric cells never fail; they coerce to zero.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use carsift_core::constants::*;
use carsift_core::errors::CatalogError;
use carsift_core::models::VehicleRecord;

use crate::catalog::Catalog;

/// Load a catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|e| CatalogError::SourceUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let catalog = load_catalog_from_reader(file)?;
    info!(path = %path.display(), rows_loaded = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Load a catalog from any CSV byte stream.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers().map_err(malformed)?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let records = csv
        .records()
        .map(|row| {
            let row = row.map_err(malformed)?;
            if row.len() > headers.len() {
                let line = row.position().map_or(0, |p| p.line());
                return Err(CatalogError::MalformedSource {
                    reason: format!(
                        "line {line}: expected at most {} fields, found {}",
                        headers.len(),
                        row.len()
                    ),
                });
            }
            Ok(columns.parse(&row))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows_loaded = records.len(), "catalog rows parsed");
    Ok(Catalog::new(records))
}

/// Header name → field position.
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Map headers and verify every required column is present.
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            // First occurrence wins on duplicate headers.
            positions.entry(name.trim().to_string()).or_insert(i);
        }

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !positions.contains_key(**column))
        {
            return Err(CatalogError::SchemaError {
                column: missing.to_string(),
            });
        }

        Ok(Self { positions })
    }

    fn parse(&self, row: &StringRecord) -> VehicleRecord {
        VehicleRecord {
            brand: self.text(row, COL_BRAND),
            model: self.text(row, COL_MODEL),
            trim: self.text(row, COL_TRIM),
            price: self.number(row, COL_PRICE),
            equipment_score: self.number(row, COL_EQUIPMENT_SCORE),
            safety_score: self.number(row, COL_SAFETY_SCORE),
            performance_score: self.number(row, COL_PERFORMANCE_SCORE),
            comfort_score: self.number(row, COL_COMFORT_SCORE),
            resale_score: self.number(row, COL_RESALE_SCORE),
            electric_consumption: self.number(row, COL_ELECTRIC_CONSUMPTION),
            home_charge_cost: self.number(row, COL_HOME_CHARGE_COST),
            annual_tax: self.number(row, COL_ANNUAL_TAX),
            annual_insurance: self.number(row, COL_ANNUAL_INSURANCE),
            annual_maintenance: self.number(row, COL_ANNUAL_MAINTENANCE),
            fuel_consumption: self.number(row, COL_FUEL_CONSUMPTION),
            horsepower: self.number(row, COL_HORSEPOWER),
            torque: self.number(row, COL_TORQUE),
            acceleration: self.number(row, COL_ACCELERATION),
            electric_range: self.number(row, COL_ELECTRIC_RANGE),
            body_length: self.number(row, COL_BODY_LENGTH),
            cargo_volume: self.number(row, COL_CARGO_VOLUME),
            body_type: self.text(row, COL_BODY_TYPE),
            fuel_type: self.text(row, COL_FUEL_TYPE),
            transmission: self.text(row, COL_TRANSMISSION),
            primary_use: self.text(row, COL_PRIMARY_USE),
        }
    }

    fn raw<'r>(&self, row: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&i| row.get(i))
            .unwrap_or("")
    }

    fn text(&self, row: &StringRecord, column: &str) -> String {
        normalize_text(self.raw(row, column))
    }

    fn number(&self, row: &StringRecord, column: &str) -> f64 {
        parse_or_zero(self.raw(row, column))
    }
}

/// Trim, and map the missing-value token to the empty string.
pub fn normalize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(MISSING_TEXT_TOKEN) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Parse a numeric cell. Anything unparseable, non-finite, or negative is 0.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(0.0, |v| v.max(0.0))
}

fn malformed(err: csv::Error) -> CatalogError {
    CatalogError::MalformedSource {
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_coerces_garbage() {
        assert_eq!(parse_or_zero("1250.5"), 1250.5);
        assert_eq!(parse_or_zero(" 42 "), 42.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("n/a"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("-3"), 0.0);
    }

    #[test]
    fn normalize_text_trims_and_drops_nan() {
        assert_eq!(normalize_text("  SUV "), "SUV");
        assert_eq!(normalize_text("nan"), "");
        assert_eq!(normalize_text(" NaN "), "");
        assert_eq!(normalize_text("Nano"), "Nano");
    }
}
