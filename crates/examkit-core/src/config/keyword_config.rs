use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword extraction pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Upper bound on refined set length (N).
    pub max_keywords: usize,
    /// Candidates kept when refinement degrades (K).
    pub degraded_top_k: usize,
    /// Use the local frequency extractor when coarse extraction fails.
    pub local_fallback: bool,
    /// Source text is truncated to this many chars before extraction.
    pub max_source_chars: usize,
    /// Filler terms the refiner is told to drop and the validator removes.
    pub generic_terms: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            max_keywords: defaults::DEFAULT_MAX_KEYWORDS,
            degraded_top_k: defaults::DEFAULT_DEGRADED_TOP_K,
            local_fallback: defaults::DEFAULT_LOCAL_FALLBACK,
            max_source_chars: defaults::DEFAULT_MAX_SOURCE_CHARS,
            generic_terms: defaults::DEFAULT_GENERIC_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
