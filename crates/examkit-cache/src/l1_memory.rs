//! L1 in-memory cache using moka.
//!
//! Unbounded unless a capacity is configured. No TTL: cached results
//! stay valid for the process lifetime.

use moka::sync::Cache;

/// Outcome of an atomic insert-if-absent.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome<V> {
    Inserted,
    /// The key was already present; carries the stored value.
    Existing(V),
}

/// L1 in-memory result cache keyed by content hash.
pub struct L1MemoryCache<V> {
    cache: Cache<String, V>,
}

impl<V> L1MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a new L1 cache. `None` means no entry bound.
    pub fn new(max_entries: Option<u64>) -> Self {
        let builder = Cache::builder();
        let cache = match max_entries {
            Some(max) => builder.max_capacity(max).build(),
            None => builder.build(),
        };
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key)
    }

    /// Insert only if the key is absent. Atomic per key.
    pub fn insert_if_absent(&self, key: String, value: V) -> InsertOutcome<V> {
        let entry = self.cache.entry(key).or_insert_with(|| value);
        if entry.is_fresh() {
            InsertOutcome::Inserted
        } else {
            InsertOutcome::Existing(entry.into_value())
        }
    }

    /// Unconditional insert, used to promote L2 hits.
    pub fn promote(&self, key: String, value: V) {
        self.cache.insert(key, value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = L1MemoryCache::new(None);
        assert_eq!(cache.insert_if_absent("k".to_string(), 7u32), InsertOutcome::Inserted);
        assert_eq!(cache.get("k"), Some(7));
    }

    #[test]
    fn second_insert_reports_existing() {
        let cache = L1MemoryCache::new(Some(100));
        cache.insert_if_absent("k".to_string(), 1u32);
        assert_eq!(cache.insert_if_absent("k".to_string(), 2u32), InsertOutcome::Existing(1));
        assert_eq!(cache.get("k"), Some(1));
    }

    #[test]
    fn clear_empties_cache() {
        let cache = L1MemoryCache::new(None);
        cache.insert_if_absent("a".to_string(), 1u32);
        cache.insert_if_absent("b".to_string(), 2u32);
        cache.clear();
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
    }
}
