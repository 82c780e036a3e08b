//! Stable error codes for callers that branch on error kind.

/// Every error enum implements this to expose a structured code string.
pub trait CarsiftErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const SOURCE_UNAVAILABLE: &str = "SOURCE_UNAVAILABLE";
pub const MALFORMED_SOURCE: &str = "MALFORMED_SOURCE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
