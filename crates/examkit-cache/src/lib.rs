//! # examkit-cache
//!
//! Content-addressed result cache sitting in front of grading and
//! coarse keyword extraction.
//!
//! L1 (moka in-memory) → L2 (SQLite persistent, optional).
//! Entries are write-once: a key maps to exactly one value for the
//! lifetime of the cache, and nothing expires implicitly.

pub mod l1_memory;
pub mod l2_sqlite;
pub mod result_cache;

pub use l1_memory::L1MemoryCache;
pub use l2_sqlite::L2SqliteCache;
pub use result_cache::{CacheHitTier, ResultCache};
