// Single source of truth for all default values.

// --- Catalog ---
pub const DEFAULT_CATALOG_PATH: &str = "arabalar.csv";
pub const DEFAULT_CATALOG_CACHE_CAPACITY: u64 = 16;

// --- Economics ---
pub const DEFAULT_ANNUAL_KM: f64 = 15_000.0;
pub const DEFAULT_FUEL_PRICE: f64 = 40.0; // per litre
pub const DEFAULT_ELECTRICITY_PRICE: f64 = 2.5; // per kWh
pub const ANNUAL_KM_RANGE: (f64, f64) = (1_000.0, 50_000.0);
pub const FUEL_PRICE_RANGE: (f64, f64) = (15.0, 60.0);
pub const ELECTRICITY_PRICE_RANGE: (f64, f64) = (1.0, 10.0);

// --- Cost model ---
pub const DEFAULT_PHEV_ELECTRIC_SHARE: f64 = 0.35;
pub const DEFAULT_PHEV_KWH_PER_100KM: f64 = 15.0;
pub const DEFAULT_LPG_PRICE_FACTOR: f64 = 0.70;

// --- Ranking ---
pub const DEFAULT_TOP_N: usize = 30;
pub const DEFAULT_WEIGHT: u8 = 3;

// --- Intent ---
pub const DEFAULT_CURRENCY_CODE: &str = "TL";
pub const DEFAULT_CARGO_MIN_LITRES: f64 = 400.0;
pub const DEFAULT_THOUSAND_WORDS: &[&str] = &["thousand", "bin"];
pub const DEFAULT_MILLION_WORDS: &[&str] = &["million", "milyon"];
pub const DEFAULT_BODY_KEYWORDS: &[&str] =
    &["SUV", "Sedan", "Hatchback", "Station Wagon", "Coupe", "Pick-up"];
pub const DEFAULT_FUEL_KEYWORDS: &[&str] = &["Diesel", "Gasoline", "Electric", "Hybrid", "LPG"];
pub const DEFAULT_CARGO_PHRASES: &[&str] = &[
    "large trunk",
    "big trunk",
    "large cargo",
    "cargo space",
    "geniş bagaj",
    "büyük bagaj",
    "yük taşıma",
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ENV_VAR: &str = "CARSIFT_LOG";
