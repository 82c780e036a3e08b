use serde::{Deserialize, Serialize};

use super::defaults;

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog CSV file.
    pub path: String,
    /// Maximum number of distinct catalog contents kept in the load cache.
    pub cache_capacity: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            cache_capacity: defaults::DEFAULT_CATALOG_CACHE_CAPACITY,
        }
    }
}
