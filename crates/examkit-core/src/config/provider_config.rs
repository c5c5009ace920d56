use serde::{Deserialize, Serialize};

use super::defaults;

/// External capability endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub chat_endpoint: String,
    pub scoring_model: String,
    pub refine_model: String,
    pub temperature: f64,
    /// Never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Key-phrase service base URL. `None` uses the local extractor only.
    pub key_phrase_endpoint: Option<String>,
    pub language: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: defaults::DEFAULT_CHAT_ENDPOINT.to_string(),
            scoring_model: defaults::DEFAULT_SCORING_MODEL.to_string(),
            refine_model: defaults::DEFAULT_REFINE_MODEL.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            api_key: None,
            key_phrase_endpoint: None,
            language: defaults::DEFAULT_LANGUAGE.to_string(),
        }
    }
}
