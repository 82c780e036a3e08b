//! Error taxonomy: one enum per subsystem, wrapped by [`CarsiftError`].

pub mod carsift_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;

pub use carsift_error::{CarsiftError, CarsiftResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::CarsiftErrorCode;
