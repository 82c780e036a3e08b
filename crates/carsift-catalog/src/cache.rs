//! Catalog cache keyed by content.
//!
//! Loading is a pure function of the source bytes, so the blake3 hash of those
//! bytes identifies a parsed catalog. Changed content gets a new key; nothing
//! needs explicit invalidation.

use std::path::Path;
use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;

use carsift_core::config::CatalogConfig;
use carsift_core::errors::CatalogError;

use crate::catalog::Catalog;
use crate::loader::load_catalog_from_reader;

/// Bounded cache of parsed catalogs. Safe to share between threads.
pub struct CatalogCache {
    cache: Cache<String, Arc<Catalog>>,
}

impl CatalogCache {
    /// Create a cache holding at most `max_entries` distinct catalogs.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::new(max_entries),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// Read a catalog file, parsing it only if its content has not been seen.
    pub fn load(&self, path: &Path) -> Result<Arc<Catalog>, CatalogError> {
        let bytes = std::fs::read(path).map_err(|e| CatalogError::SourceUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.load_bytes(&bytes)
    }

    /// Load the catalog file named in `config`.
    pub fn load_configured(&self, config: &CatalogConfig) -> Result<Arc<Catalog>, CatalogError> {
        self.load(Path::new(&config.path))
    }

    /// Parse catalog bytes, or return the cached result for identical bytes.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Arc<Catalog>, CatalogError> {
        let hash = blake3::hash(bytes).to_hex().to_string();
        if let Some(catalog) = self.cache.get(&hash) {
            debug!(content_hash = %hash, "catalog cache hit");
            return Ok(catalog);
        }

        let catalog = Arc::new(load_catalog_from_reader(bytes)?);
        debug!(content_hash = %hash, rows_loaded = catalog.len(), "catalog cache miss");
        self.cache.insert(hash, Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}
