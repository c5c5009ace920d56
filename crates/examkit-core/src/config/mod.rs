pub mod cache_config;
pub mod defaults;
pub mod grading_config;
pub mod keyword_config;
pub mod provider_config;
pub mod recommendation_config;
pub mod resilience_config;
pub mod session_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use grading_config::GradingConfig;
pub use keyword_config::KeywordConfig;
pub use provider_config::ProviderConfig;
pub use recommendation_config::RecommendationConfig;
pub use resilience_config::ResilienceConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`EXAMKIT_*`)
/// 2. TOML file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamkitConfig {
    pub grading: GradingConfig,
    pub keywords: KeywordConfig,
    pub recommendation: RecommendationConfig,
    pub cache: CacheConfig,
    pub resilience: ResilienceConfig,
    pub providers: ProviderConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
}

impl ExamkitConfig {
    /// Load from a TOML file, apply environment overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML. The API key is never written.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `EXAMKIT_*` overrides. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EXAMKIT_GRADING_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.grading.threshold = v;
        }
        if let Some(v) = lookup("EXAMKIT_GRADING_MARGIN").and_then(|v| v.parse().ok()) {
            self.grading.uncertain_margin = v;
        }
        if let Some(v) = lookup("EXAMKIT_RESILIENCE_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.resilience.timeout_ms = v;
        }
        if let Some(v) = lookup("EXAMKIT_RESILIENCE_MAX_RETRIES").and_then(|v| v.parse().ok()) {
            self.resilience.max_retries = v;
        }
        if let Some(v) = lookup("EXAMKIT_PROVIDER_API_KEY") {
            self.providers.api_key = Some(v);
        }
        if let Some(v) = lookup("EXAMKIT_KEY_PHRASE_ENDPOINT") {
            self.providers.key_phrase_endpoint = Some(v);
        }
        if let Some(v) = lookup("EXAMKIT_DB_PATH") {
            self.storage.db_path = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |field: &str, message: &str| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: message.to_string(),
        };

        if !(0.0..=1.0).contains(&self.grading.threshold) {
            return Err(fail("grading.threshold", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=self.grading.threshold).contains(&self.grading.uncertain_margin) {
            return Err(fail(
                "grading.uncertain_margin",
                "must be between 0.0 and grading.threshold",
            ));
        }
        let weights = self.grading.sequence_weight + self.grading.recall_weight;
        if self.grading.sequence_weight < 0.0
            || self.grading.recall_weight < 0.0
            || (weights - 1.0).abs() > 1e-9
        {
            return Err(fail(
                "grading.sequence_weight",
                "lexical weights must be non-negative and sum to 1.0",
            ));
        }
        if self.keywords.max_keywords == 0 {
            return Err(fail("keywords.max_keywords", "must be greater than 0"));
        }
        if self.keywords.degraded_top_k == 0 {
            return Err(fail("keywords.degraded_top_k", "must be greater than 0"));
        }
        if self.recommendation.default_limit == 0
            || self.recommendation.default_limit > self.recommendation.max_limit
        {
            return Err(fail(
                "recommendation.default_limit",
                "must be between 1 and recommendation.max_limit",
            ));
        }
        if self.resilience.timeout_ms == 0 {
            return Err(fail("resilience.timeout_ms", "must be greater than 0"));
        }
        if self.resilience.circuit_failure_threshold == 0 {
            return Err(fail(
                "resilience.circuit_failure_threshold",
                "must be greater than 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.session.wrong_ratio) {
            return Err(fail("session.wrong_ratio", "must be between 0.0 and 1.0"));
        }
        if self.session.min_test_questions > self.session.max_test_questions {
            return Err(fail(
                "session.min_test_questions",
                "must not exceed session.max_test_questions",
            ));
        }
        Ok(())
    }
}
