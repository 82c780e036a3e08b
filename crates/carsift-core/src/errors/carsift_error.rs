use super::catalog_error::CatalogError;
use super::config_error::ConfigError;
use super::error_code::CarsiftErrorCode;

/// Top-level error for the engine.
#[derive(Debug, thiserror::Error)]
pub enum CarsiftError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl CarsiftErrorCode for CarsiftError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CarsiftResult<T> = Result<T, CarsiftError>;
