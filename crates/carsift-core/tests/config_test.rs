use std::io::Write;

use carsift_core::config::*;
use carsift_core::errors::ConfigError;
use carsift_core::models::Dimension;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CarsiftConfig::from_toml("").unwrap();

    // Catalog defaults
    assert_eq!(config.catalog.path, "arabalar.csv");
    assert_eq!(config.catalog.cache_capacity, 16);

    // Economics defaults
    assert_eq!(config.economics.annual_km, 15_000.0);
    assert_eq!(config.economics.fuel_price, 40.0);
    assert_eq!(config.economics.electricity_price, 2.5);

    // Cost defaults
    assert_eq!(config.cost.phev_electric_share, 0.35);
    assert_eq!(config.cost.phev_default_kwh_per_100km, 15.0);
    assert_eq!(config.cost.lpg_price_factor, 0.70);

    // Ranking defaults
    assert_eq!(config.ranking.top_n, 30);
    for dimension in Dimension::ALL {
        assert_eq!(config.ranking.default_weights.get(dimension), 3);
    }

    // Intent defaults
    assert_eq!(config.intent.currency_code, "TL");
    assert_eq!(config.intent.cargo_min_litres, 400.0);
    assert_eq!(config.intent.body_keywords.first().map(String::as_str), Some("SUV"));
    assert_eq!(config.intent.fuel_keywords.len(), 5);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.log_env_var, "CARSIFT_LOG");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[economics]
annual_km = 22000

[ranking]
top_n = 10

[ranking.default_weights]
cost = 5
safety = 4
"#;
    let config = CarsiftConfig::from_toml(toml).unwrap();
    assert_eq!(config.economics.annual_km, 22_000.0);
    // Non-overridden fields keep defaults
    assert_eq!(config.economics.fuel_price, 40.0);
    assert_eq!(config.ranking.top_n, 10);
    assert_eq!(config.ranking.default_weights.cost(), 5);
    assert_eq!(config.ranking.default_weights.safety(), 4);
    assert_eq!(config.ranking.default_weights.comfort(), 3);
}

#[test]
fn config_rejects_out_of_range_economics() {
    let err = CarsiftConfig::from_toml("[economics]\nfuel_price = 99.0\n").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "economics.fuel_price"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn config_rejects_out_of_range_weight() {
    let err = CarsiftConfig::from_toml("[ranking.default_weights]\ncomfort = 9\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("comfort"));
}

#[test]
fn config_rejects_zero_top_n() {
    let err = CarsiftConfig::from_toml("[ranking]\ntop_n = 0\n").unwrap_err();
    assert!(err.to_string().contains("ranking.top_n"));
}

#[test]
fn config_rejects_electric_share_above_one() {
    let err = CarsiftConfig::from_toml("[cost]\nphev_electric_share = 1.5\n").unwrap_err();
    assert!(err.to_string().contains("phev_electric_share"));
}

#[test]
fn config_reports_syntax_errors_as_parse_errors() {
    let err = CarsiftConfig::from_toml("[economics\nannual_km = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[catalog]\npath = \"/data/cars.csv\"").unwrap();
    let config = CarsiftConfig::from_file(file.path()).unwrap();
    assert_eq!(config.catalog.path, "/data/cars.csv");
}

#[test]
fn config_from_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = CarsiftConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = CarsiftConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = CarsiftConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.catalog.path, config.catalog.path);
    assert_eq!(roundtripped.ranking.default_weights, config.ranking.default_weights);
    assert_eq!(roundtripped.intent.cargo_phrases, config.intent.cargo_phrases);
}
