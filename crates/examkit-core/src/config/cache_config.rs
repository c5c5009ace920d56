use serde::{Deserialize, Serialize};

use super::defaults;

/// Result cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// L1 entry bound. `None` means unbounded; entries never expire.
    pub l1_max_entries: Option<u64>,
    pub l2_enabled: bool,
    pub l2_path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            l1_max_entries: None,
            l2_enabled: defaults::DEFAULT_L2_CACHE_ENABLED,
            l2_path: defaults::DEFAULT_L2_CACHE_FILENAME.to_string(),
        }
    }
}
