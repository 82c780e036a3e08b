//! Shared constants for the carsift engine.

/// carsift version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Catalog columns ----
//
// Header names of the catalog file. Lookup is by name, so column order in the
// file is free.

pub const COL_BRAND: &str = "marka";
pub const COL_MODEL: &str = "model";
pub const COL_TRIM: &str = "motor_donanim";
pub const COL_PRICE: &str = "fiyat_tl";
pub const COL_EQUIPMENT_SCORE: &str = "donanim_skor";
pub const COL_SAFETY_SCORE: &str = "guvenlik_skor";
pub const COL_PERFORMANCE_SCORE: &str = "performans_skor";
pub const COL_COMFORT_SCORE: &str = "konfor_skor";
pub const COL_RESALE_SCORE: &str = "ikinci_el_skor";
pub const COL_ELECTRIC_CONSUMPTION: &str = "tuketim_kwh";
pub const COL_HOME_CHARGE_COST: &str = "ev_sarj_tl";
pub const COL_ANNUAL_TAX: &str = "yillik_mtv";
pub const COL_ANNUAL_INSURANCE: &str = "yillik_sigorta";
pub const COL_ANNUAL_MAINTENANCE: &str = "yillik_bakim";
pub const COL_FUEL_CONSUMPTION: &str = "ortalama_tuketim";
pub const COL_HORSEPOWER: &str = "beygir_gucu";
pub const COL_TORQUE: &str = "tork_nm";
pub const COL_ACCELERATION: &str = "hizlanma_0_100s";
pub const COL_ELECTRIC_RANGE: &str = "elektrikli_menzil_km";
pub const COL_BODY_LENGTH: &str = "gövde_uzunlugu_mm";
pub const COL_CARGO_VOLUME: &str = "bagaj_hacmi_lt";
pub const COL_BODY_TYPE: &str = "kasa_tipi";
pub const COL_FUEL_TYPE: &str = "yakit_tipi";
pub const COL_TRANSMISSION: &str = "sanziman";
pub const COL_PRIMARY_USE: &str = "kullanim_amaci";

/// Number of required catalog columns.
pub const REQUIRED_COLUMN_COUNT: usize = 25;

/// Required columns, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; REQUIRED_COLUMN_COUNT] = [
    COL_MODEL,
    COL_BRAND,
    COL_TRIM,
    COL_PRICE,
    COL_EQUIPMENT_SCORE,
    COL_SAFETY_SCORE,
    COL_PERFORMANCE_SCORE,
    COL_COMFORT_SCORE,
    COL_RESALE_SCORE,
    COL_ELECTRIC_CONSUMPTION,
    COL_HOME_CHARGE_COST,
    COL_ANNUAL_TAX,
    COL_ANNUAL_INSURANCE,
    COL_ANNUAL_MAINTENANCE,
    COL_FUEL_CONSUMPTION,
    COL_HORSEPOWER,
    COL_TORQUE,
    COL_ACCELERATION,
    COL_ELECTRIC_RANGE,
    COL_BODY_LENGTH,
    COL_CARGO_VOLUME,
    COL_BODY_TYPE,
    COL_FUEL_TYPE,
    COL_TRANSMISSION,
    COL_PRIMARY_USE,
];

/// Text token that normalizes to the empty string on load.
pub const MISSING_TEXT_TOKEN: &str = "nan";

// ---- Scores ----

/// Lower bound of every subjective score.
pub const SCORE_MIN: f64 = 1.0;

/// Upper bound of every subjective and derived score.
pub const SCORE_MAX: f64 = 5.0;

/// Neutral sub-score used when a set has no usable spread.
pub const NEUTRAL_SUBSCORE: f64 = 2.5;

/// Floor applied to the acceleration sub-score.
pub const ACCELERATION_FLOOR: f64 = 0.5;

/// Sub-score forced onto records with a zero torque or 0-100 figure.
pub const MISSING_FIGURE_SUBSCORE: f64 = 1.0;

// ---- Weights ----

/// Smallest allowed importance weight.
pub const WEIGHT_MIN: u8 = 1;

/// Largest allowed importance weight.
pub const WEIGHT_MAX: u8 = 5;

/// Number of scoring dimensions in a weight profile.
pub const DIMENSION_COUNT: usize = 5;

// ---- Comparison ----

/// Most variants shown side by side.
pub const MAX_COMPARED_VARIANTS: usize = 3;
