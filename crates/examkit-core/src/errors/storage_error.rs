//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ExamkitErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt row in {table}: {details}")]
    CorruptRow { table: String, details: String },
}

impl ExamkitErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
