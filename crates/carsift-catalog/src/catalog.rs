use serde::Serialize;

use carsift_core::models::{ExpandedVariant, VehicleRecord};

/// The validated base catalog, in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
}

impl Catalog {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that survive into expansion.
    pub fn eligible(&self) -> impl Iterator<Item = (usize, &VehicleRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_eligible())
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }
}

impl FromIterator<VehicleRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = VehicleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The catalog after trim-tier expansion.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExpandedCatalog {
    variants: Vec<ExpandedVariant>,
    base_count: usize,
}

impl ExpandedCatalog {
    pub fn new(variants: Vec<ExpandedVariant>, base_count: usize) -> Self {
        Self {
            variants,
            base_count,
        }
    }

    pub fn variants(&self) -> &[ExpandedVariant] {
        &self.variants
    }

    /// Number of base records that were expanded.
    pub fn base_count(&self) -> usize {
        self.base_count
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
