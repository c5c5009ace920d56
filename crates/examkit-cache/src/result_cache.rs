//! Two-tier write-once cache coordinator.

use std::path::Path;

use examkit_core::config::CacheConfig;
use examkit_core::errors::CacheError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::l1_memory::{InsertOutcome, L1MemoryCache};
use crate::l2_sqlite::L2SqliteCache;

/// Which tier answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHitTier {
    L1,
    L2,
    Miss,
}

/// Content-addressed, write-once cache.
///
/// `put` of an identical value for an existing key is a no-op; a
/// different value is a [`CacheError::KeyCollision`]. Equality is
/// judged on the serialized form so that both tiers agree.
pub struct ResultCache<V> {
    l1: L1MemoryCache<V>,
    l2: Option<L2SqliteCache>,
}

impl<V> ResultCache<V>
where
    V: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// In-memory only.
    pub fn in_memory(max_entries: Option<u64>) -> Self {
        Self {
            l1: L1MemoryCache::new(max_entries),
            l2: None,
        }
    }

    /// In-memory L1 over a persistent L2.
    pub fn with_l2(max_entries: Option<u64>, l2: L2SqliteCache) -> Self {
        Self {
            l1: L1MemoryCache::new(max_entries),
            l2: Some(l2),
        }
    }

    /// Build from config, opening the L2 file when enabled.
    pub fn from_config(config: &CacheConfig) -> Result<Self, CacheError> {
        if config.l2_enabled {
            let l2 = L2SqliteCache::open(Path::new(&config.l2_path))?;
            Ok(Self::with_l2(config.l1_max_entries, l2))
        } else {
            Ok(Self::in_memory(config.l1_max_entries))
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.lookup(key).0
    }

    /// Look up a key across tiers. L2 hits are promoted to L1.
    ///
    /// L2 read or decode failures are logged and treated as a miss.
    pub fn lookup(&self, key: &str) -> (Option<V>, CacheHitTier) {
        if let Some(value) = self.l1.get(key) {
            debug!(key, tier = "L1", "cache hit");
            return (Some(value), CacheHitTier::L1);
        }

        let Some(l2) = &self.l2 else {
            return (None, CacheHitTier::Miss);
        };
        match l2.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<V>(&raw) {
                Ok(value) => {
                    debug!(key, tier = "L2", "cache hit");
                    self.l1.promote(key.to_string(), value.clone());
                    (Some(value), CacheHitTier::L2)
                }
                Err(e) => {
                    warn!(key, error = %e, "undecodable L2 cache entry, treating as miss");
                    (None, CacheHitTier::Miss)
                }
            },
            Ok(None) => (None, CacheHitTier::Miss),
            Err(e) => {
                warn!(key, error = %e, "L2 cache read failed, treating as miss");
                (None, CacheHitTier::Miss)
            }
        }
    }

    /// Store a value. Write-once per key.
    pub fn put(&self, key: &str, value: V) -> Result<(), CacheError> {
        let encoded = encode(&value)?;

        if let Some(l2) = &self.l2 {
            if let Some(existing) = l2.insert_if_absent(key, &encoded)? {
                if existing != encoded {
                    return Err(CacheError::KeyCollision {
                        key: key.to_string(),
                    });
                }
            }
        }

        match self.l1.insert_if_absent(key.to_string(), value) {
            InsertOutcome::Inserted => Ok(()),
            InsertOutcome::Existing(existing) => {
                if encode(&existing)? == encoded {
                    Ok(())
                } else {
                    Err(CacheError::KeyCollision {
                        key: key.to_string(),
                    })
                }
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.l1.contains(key) || self.get(key).is_some()
    }

    /// Number of L1 entries.
    pub fn len(&self) -> u64 {
        self.l1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l1.is_empty()
    }

    /// Drop every entry from both tiers.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.l1.clear();
        if let Some(l2) = &self.l2 {
            l2.clear()?;
        }
        Ok(())
    }
}

fn encode<V: Serialize>(value: &V) -> Result<String, CacheError> {
    serde_json::to_string(value).map_err(|e| CacheError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_on_empty() {
        let cache: ResultCache<String> = ResultCache::in_memory(None);
        assert_eq!(cache.lookup("nope"), (None, CacheHitTier::Miss));
    }

    #[test]
    fn identical_put_is_noop() {
        let cache = ResultCache::in_memory(None);
        cache.put("k", "v".to_string()).unwrap();
        cache.put("k", "v".to_string()).unwrap();
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn different_put_collides() {
        let cache = ResultCache::in_memory(None);
        cache.put("k", "v".to_string()).unwrap();
        let err = cache.put("k", "w".to_string()).unwrap_err();
        assert_eq!(err, CacheError::KeyCollision { key: "k".to_string() });
        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn l2_hit_promotes_to_l1() {
        let l2 = L2SqliteCache::open_in_memory().unwrap();
        l2.insert_if_absent("k", "\"persisted\"").unwrap();
        let cache: ResultCache<String> = ResultCache::with_l2(None, l2);

        let (value, tier) = cache.lookup("k");
        assert_eq!(value.as_deref(), Some("persisted"));
        assert_eq!(tier, CacheHitTier::L2);

        let (_, tier) = cache.lookup("k");
        assert_eq!(tier, CacheHitTier::L1);
    }

    #[test]
    fn collision_detected_against_l2() {
        let l2 = L2SqliteCache::open_in_memory().unwrap();
        l2.insert_if_absent("k", "\"old\"").unwrap();
        let cache: ResultCache<String> = ResultCache::with_l2(None, l2);
        assert!(matches!(
            cache.put("k", "new".to_string()),
            Err(CacheError::KeyCollision { .. })
        ));
    }

    #[test]
    fn clear_drops_both_tiers() {
        let cache: ResultCache<String> =
            ResultCache::with_l2(None, L2SqliteCache::open_in_memory().unwrap());
        cache.put("k", "v".to_string()).unwrap();
        cache.clear().unwrap();
        assert_eq!(cache.get("k"), None);
        cache.put("k", "w".to_string()).unwrap();
        assert_eq!(cache.get("k").as_deref(), Some("w"));
    }
}
