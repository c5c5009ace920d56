//! L2 SQLite-backed result cache.
//!
//! Persists results as `key → JSON` rows. Survives process restarts.

use std::path::Path;
use std::sync::Mutex;

use examkit_core::errors::CacheError;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

fn to_cache_err(e: impl std::fmt::Display) -> CacheError {
    CacheError::Storage {
        reason: e.to_string(),
    }
}

/// L2 persistent cache over a single SQLite connection.
pub struct L2SqliteCache {
    conn: Mutex<Connection>,
}

impl L2SqliteCache {
    /// Open or create a cache database on disk.
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        let conn = Connection::open(path).map_err(to_cache_err)?;
        Self::initialize(conn)
    }

    /// Open an in-memory cache database (for testing).
    pub fn open_in_memory() -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory().map_err(to_cache_err)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA busy_timeout = 5000;

            CREATE TABLE IF NOT EXISTS result_cache (
                key         TEXT PRIMARY KEY,
                value       TEXT NOT NULL,
                created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );
            ",
        )
        .map_err(to_cache_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, CacheError>,
    ) -> Result<T, CacheError> {
        let conn = self.conn.lock().unwrap_or_else(|p| p.into_inner());
        f(&conn)
    }

    /// Look up the serialized value for a key.
    pub fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM result_cache WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(to_cache_err)
        })
    }

    /// Insert unless the key exists. Returns the stored value when it did.
    pub fn insert_if_absent(&self, key: &str, value: &str) -> Result<Option<String>, CacheError> {
        self.with_conn(|conn| {
            let changed = conn
                .execute(
                    "INSERT OR IGNORE INTO result_cache (key, value) VALUES (?1, ?2)",
                    params![key, value],
                )
                .map_err(to_cache_err)?;
            if changed == 1 {
                debug!(key, "L2 cache insert");
                return Ok(None);
            }
            conn.query_row(
                "SELECT value FROM result_cache WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .map(Some)
            .map_err(to_cache_err)
        })
    }

    pub fn len(&self) -> Result<usize, CacheError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM result_cache", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|n| n as usize)
            .map_err(to_cache_err)
        })
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }

    /// Remove all entries.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM result_cache", [])
                .map(|_| ())
                .map_err(to_cache_err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        assert_eq!(cache.insert_if_absent("k", "{\"a\":1}").unwrap(), None);
        assert_eq!(cache.get("k").unwrap().as_deref(), Some("{\"a\":1}"));
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn existing_value_is_kept() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        cache.insert_if_absent("k", "first").unwrap();
        assert_eq!(cache.insert_if_absent("k", "second").unwrap().as_deref(), Some("first"));
        assert_eq!(cache.get("k").unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn clear_removes_rows() {
        let cache = L2SqliteCache::open_in_memory().unwrap();
        cache.insert_if_absent("a", "1").unwrap();
        cache.clear().unwrap();
        assert!(cache.is_empty().unwrap());
        assert_eq!(cache.get("a").unwrap(), None);
    }
}
