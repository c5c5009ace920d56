//! Result cache errors.

use super::error_code::{self, ExamkitErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CacheError {
    /// A different value is already stored under this key.
    #[error("cache key collision for {key}")]
    KeyCollision { key: String },

    #[error("cache serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("cache storage error: {reason}")]
    Storage { reason: String },
}

impl ExamkitErrorCode for CacheError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::KeyCollision { .. } => error_code::CACHE_KEY_COLLISION,
            Self::Serialization { .. } | Self::Storage { .. } => error_code::CACHE_ERROR,
        }
    }
}
