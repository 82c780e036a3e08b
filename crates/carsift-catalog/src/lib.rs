//! # carsift-catalog
//!
//! Turns a catalog CSV into typed records, and typed records into the
//! trim-tier variants the ranking stages work on.
//!
//! - [`loader`]: schema check, parse-or-zero numeric coercion, text normalization.
//! - [`expander`]: three trim tiers per eligible base record.
//! - [`facets`]: distinct-value option lists and price bounds.
//! - [`cache`]: content-addressed cache of loaded catalogs.

pub mod cache;
pub mod catalog;
pub mod expander;
pub mod facets;
pub mod loader;

pub use cache::CatalogCache;
pub use catalog::{Catalog, ExpandedCatalog};
pub use expander::expand;
pub use facets::CatalogFacets;
pub use loader::{load_catalog, load_catalog_from_reader};
