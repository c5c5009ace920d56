//! Schema migrations, tracked with `PRAGMA user_version`.

pub mod v001_initial;

use examkit_core::errors::StorageError;
use rusqlite::Connection;
use tracing::info;

use crate::to_storage_err;

const MIGRATIONS: &[(u32, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Current schema version.
pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the stored version. Idempotent.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;
    for (version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        tx.execute_batch(sql)
            .and_then(|_| tx.pragma_update(None, "user_version", version))
            .and_then(|_| tx.commit())
            .map_err(|e| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
        info!(version, "applied migration");
    }
    Ok(())
}
