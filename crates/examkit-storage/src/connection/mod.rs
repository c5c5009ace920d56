//! Connection management: one write-serialized connection.

pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use examkit_core::errors::StorageError;
use rusqlite::Connection;
use tracing::info;

use self::pragmas::apply_pragmas;
use crate::{migrations, to_storage_err};

pub struct Database {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database file, apply pragmas, run migrations.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        migrations::run_migrations(&conn)?;
        info!(path = %path.display(), "database opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Run `f` with the connection held.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection lock poisoned"))?;
        f(&guard)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
