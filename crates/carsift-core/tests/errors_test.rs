use carsift_core::errors::error_code::{self, CarsiftErrorCode};
use carsift_core::errors::*;

#[test]
fn schema_error_carries_column() {
    let err = CatalogError::SchemaError {
        column: "tork_nm".into(),
    };
    assert!(err.to_string().contains("tork_nm"));
    assert_eq!(err.error_code(), error_code::SCHEMA_ERROR);
}

#[test]
fn source_unavailable_carries_path_and_reason() {
    let err = CatalogError::SourceUnavailable {
        path: "/missing/cars.csv".into(),
        reason: "No such file or directory".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/missing/cars.csv"));
    assert!(msg.contains("No such file"));
    assert_eq!(err.error_code(), error_code::SOURCE_UNAVAILABLE);
}

#[test]
fn malformed_source_carries_reason() {
    let err = CatalogError::MalformedSource {
        reason: "line 4: found 27 fields".into(),
    };
    assert!(err.to_string().contains("line 4"));
    assert_eq!(err.error_code(), error_code::MALFORMED_SOURCE);
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = ConfigError::InvalidValue {
        field: "economics.annual_km".into(),
        message: "too large".into(),
    };
    let coded = err.coded_string();
    assert!(coded.starts_with("[CONFIG_ERROR]"));
    assert!(coded.contains("economics.annual_km"));
}

// --- From impls ---

#[test]
fn catalog_error_converts_to_carsift_error() {
    let err: CarsiftError = CatalogError::SchemaError {
        column: "marka".into(),
    }
    .into();
    assert!(matches!(err, CarsiftError::Catalog(_)));
    assert_eq!(err.error_code(), error_code::SCHEMA_ERROR);
}

#[test]
fn config_error_converts_to_carsift_error() {
    let err: CarsiftError = ConfigError::FileNotFound {
        path: "carsift.toml".into(),
    }
    .into();
    assert!(matches!(err, CarsiftError::Config(_)));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}
