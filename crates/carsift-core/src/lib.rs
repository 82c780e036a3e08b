//! # carsift-core
//!
//! Foundation crate for the carsift recommendation engine.
//! Defines the vehicle data model, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::CarsiftConfig;
pub use errors::{CarsiftError, CarsiftResult};
pub use models::{
    Dimension, Economics, ExpandedVariant, FilterCriteria, Propulsion, ScoredVariant, TrimTier,
    VehicleRecord, WeightProfile,
};
