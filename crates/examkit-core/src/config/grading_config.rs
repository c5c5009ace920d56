use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer grading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Scores at or above this are correct.
    pub threshold: f64,
    /// Width of the uncertain band below the threshold.
    pub uncertain_margin: f64,
    /// Re-score once when the first score lands in the uncertain band.
    pub second_pass: bool,
    /// Run deterministic exact/option/enumeration/acronym checks first.
    pub rule_checks: bool,
    pub missing_acronym_score: f64,
    /// Weight of the character-sequence ratio in the lexical fallback.
    pub sequence_weight: f64,
    /// Weight of reference-token recall in the lexical fallback.
    pub recall_weight: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_VERDICT_THRESHOLD,
            uncertain_margin: defaults::DEFAULT_UNCERTAIN_MARGIN,
            second_pass: defaults::DEFAULT_SECOND_PASS,
            rule_checks: defaults::DEFAULT_RULE_CHECKS,
            missing_acronym_score: defaults::DEFAULT_MISSING_ACRONYM_SCORE,
            sequence_weight: defaults::DEFAULT_SEQUENCE_WEIGHT,
            recall_weight: defaults::DEFAULT_RECALL_WEIGHT,
        }
    }
}
