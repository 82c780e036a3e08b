//! Option lists and bounds a presentation layer needs to build its filter controls.

use std::collections::BTreeSet;

use serde::Serialize;

use carsift_core::models::VehicleRecord;

use crate::catalog::Catalog;

/// Price bounds used when the catalog is empty.
const EMPTY_CATALOG_MAX_PRICE: u64 = 1_000_000;

/// Headroom above the most expensive record offered as a budget ceiling.
const BUDGET_HEADROOM: f64 = 1.5;

/// Price range of the base catalog, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
    /// Upper end offered for the budget ceiling.
    pub budget_upper: u64,
}

/// Distinct values and bounds over the base catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFacets {
    pub brands: Vec<String>,
    pub models: Vec<String>,
    pub body_types: Vec<String>,
    pub fuel_types: Vec<String>,
    pub transmissions: Vec<String>,
    pub primary_uses: Vec<String>,
    pub price: PriceBounds,
    pub max_horsepower: u64,
    pub max_cargo_volume: u64,
}

impl CatalogFacets {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let records = catalog.records();
        Self {
            brands: distinct(records.iter(), |r| &r.brand),
            models: distinct(records.iter(), |r| &r.model),
            body_types: distinct(records.iter(), |r| &r.body_type),
            fuel_types: distinct(records.iter(), |r| &r.fuel_type),
            transmissions: distinct(records.iter(), |r| &r.transmission),
            primary_uses: distinct(records.iter(), |r| &r.primary_use),
            price: price_bounds(records),
            max_horsepower: whole(max_of(records, |r| r.horsepower)),
            max_cargo_volume: whole(max_of(records, |r| r.cargo_volume)),
        }
    }
}

/// Models on offer, narrowed to one brand when a brand is chosen.
pub fn models_for(catalog: &Catalog, brand: Option<&str>) -> Vec<String> {
    distinct(
        catalog
            .records()
            .iter()
            .filter(|r| brand.is_none_or(|b| r.brand == b)),
        |r| &r.model,
    )
}

/// Trims on offer. Without a brand or model choice there is nothing to narrow
/// to, so the list is empty.
pub fn trims_for(catalog: &Catalog, brand: Option<&str>, model: Option<&str>) -> Vec<String> {
    if brand.is_none() && model.is_none() {
        return Vec::new();
    }
    distinct(
        catalog.records().iter().filter(|r| {
            brand.is_none_or(|b| r.brand == b) && model.is_none_or(|m| r.model == m)
        }),
        |r| &r.trim,
    )
}

fn distinct<'a, I, F>(records: I, field: F) -> Vec<String>
where
    I: Iterator<Item = &'a VehicleRecord>,
    F: Fn(&'a VehicleRecord) -> &'a String,
{
    records
        .map(field)
        .filter(|value| !value.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn price_bounds(records: &[VehicleRecord]) -> PriceBounds {
    if records.is_empty() {
        return PriceBounds {
            min: 0,
            max: EMPTY_CATALOG_MAX_PRICE,
            budget_upper: whole(EMPTY_CATALOG_MAX_PRICE as f64 * BUDGET_HEADROOM),
        };
    }
    let min = records
        .iter()
        .map(|r| r.price)
        .fold(f64::INFINITY, f64::min);
    let max = max_of(records, |r| r.price);
    let max_whole = whole(max);
    PriceBounds {
        min: whole(min),
        max: max_whole,
        budget_upper: whole(max_whole as f64 * BUDGET_HEADROOM),
    }
}

fn max_of(records: &[VehicleRecord], field: impl Fn(&VehicleRecord) -> f64) -> f64 {
    records.iter().map(field).fold(0.0, f64::max)
}

/// Truncate a non-negative amount to whole units.
fn whole(value: f64) -> u64 {
    value.max(0.0).trunc() as u64
}
