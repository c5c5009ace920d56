//! Stable error codes for structured logs and API boundaries.

/// Every error enum implements this to expose a machine-readable code.
pub trait ExamkitErrorCode {
    /// Returns the code string (e.g., "CACHE_KEY_COLLISION").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EXTERNAL_SERVICE_TIMEOUT: &str = "EXTERNAL_SERVICE_TIMEOUT";
pub const EXTERNAL_SERVICE_MALFORMED_RESPONSE: &str = "EXTERNAL_SERVICE_MALFORMED_RESPONSE";
pub const EXTERNAL_SERVICE_RATE_LIMITED: &str = "EXTERNAL_SERVICE_RATE_LIMITED";
pub const EXTERNAL_SERVICE_UNAVAILABLE: &str = "EXTERNAL_SERVICE_UNAVAILABLE";
pub const EXTERNAL_SERVICE_REJECTED: &str = "EXTERNAL_SERVICE_REJECTED";
pub const CIRCUIT_OPEN: &str = "CIRCUIT_OPEN";
pub const VALIDATION_FAILURE: &str = "VALIDATION_FAILURE";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const CACHE_KEY_COLLISION: &str = "CACHE_KEY_COLLISION";
pub const CACHE_ERROR: &str = "CACHE_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
