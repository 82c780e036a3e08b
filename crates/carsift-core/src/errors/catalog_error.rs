//! Catalog loading errors.

use super::error_code::{self, CarsiftErrorCode};

/// Fatal catalog load failures. Nothing is loaded when any of these occur.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is missing required column '{column}'")]
    SchemaError { column: String },

    #[error("catalog source unavailable: {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("catalog source is malformed: {reason}")]
    MalformedSource { reason: String },
}

impl CarsiftErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaError { .. } => error_code::SCHEMA_ERROR,
            Self::SourceUnavailable { .. } => error_code::SOURCE_UNAVAILABLE,
            Self::MalformedSource { .. } => error_code::MALFORMED_SOURCE,
        }
    }
}
