use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_RECOMMENDATION_LIMIT;

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    /// Entries must score strictly above this.
    pub min_score: f64,
    /// Cap same-category entries at `ceil(limit / 2)`.
    pub category_diversity: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_RECOMMENDATION_LIMIT,
            max_limit: MAX_RECOMMENDATION_LIMIT,
            min_score: defaults::DEFAULT_MIN_OVERLAP_SCORE,
            category_diversity: defaults::DEFAULT_CATEGORY_DIVERSITY,
        }
    }
}
