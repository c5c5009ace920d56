//! # examkit-storage
//!
//! SQLite persistence for the question bank and the wrong-answer log.
//! One serialized connection, schema versioned through `user_version`.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use connection::Database;
pub use engine::StorageEngine;

use examkit_core::errors::StorageError;

/// Wrap any displayable error as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::SqliteError {
        message: message.into(),
    }
}
