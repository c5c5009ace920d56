//! Error types. One enum per subsystem, aggregated by [`ExamkitError`].

pub mod cache_error;
pub mod capability_error;
pub mod config_error;
pub mod error_code;
pub mod examkit_error;
pub mod storage_error;
pub mod validation_error;

pub use cache_error::CacheError;
pub use capability_error::CapabilityError;
pub use config_error::ConfigError;
pub use error_code::ExamkitErrorCode;
pub use examkit_error::{ExamkitError, ExamkitResult};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
