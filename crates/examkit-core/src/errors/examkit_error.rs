use super::error_code::ExamkitErrorCode;
use super::{CacheError, CapabilityError, ConfigError, StorageError, ValidationError};

/// Top-level error for every examkit crate.
#[derive(Debug, thiserror::Error)]
pub enum ExamkitError {
    #[error("capability error: {0}")]
    CapabilityError(#[from] CapabilityError),

    #[error("cache error: {0}")]
    CacheError(#[from] CacheError),

    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ExamkitErrorCode for ExamkitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CapabilityError(e) => e.error_code(),
            Self::CacheError(e) => e.error_code(),
            Self::ValidationError(e) => e.error_code(),
            Self::StorageError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::SerializationError(_) => super::error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type ExamkitResult<T> = Result<T, ExamkitError>;
