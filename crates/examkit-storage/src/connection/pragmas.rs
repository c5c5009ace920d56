//! PRAGMA configuration applied on open.

use examkit_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_storage_err;

/// WAL journal, NORMAL sync, foreign keys on, and the given busy timeout.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = {busy_timeout_ms};
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))
}
