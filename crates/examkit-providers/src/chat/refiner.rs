//! Keyword refinement over chat completions.

use examkit_core::constants::CAPABILITY_REFINER;
use examkit_core::errors::CapabilityError;
use examkit_core::traits::{IKeywordRefiner, RefinementRequest};
use serde_json::Value;

use super::client::ChatClient;
use super::prompts;

/// Filters coarse candidates down to domain terminology.
#[derive(Debug, Clone)]
pub struct LlmKeywordRefiner {
    client: ChatClient,
    model: String,
    temperature: f64,
}

impl LlmKeywordRefiner {
    pub fn new(client: ChatClient, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }
}

/// Accepts `{"keywords": [..]}` or a comma-separated `{"keywords": "a, b"}`.
pub(crate) fn parse_keywords(value: &Value) -> Result<Vec<String>, CapabilityError> {
    let terms: Vec<String> = match value.get("keywords") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => s.split([',', '，']).map(str::to_string).collect(),
        _ => {
            return Err(CapabilityError::malformed(
                CAPABILITY_REFINER,
                "keywords missing or not a list",
            ))
        }
    };
    Ok(terms
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

impl IKeywordRefiner for LlmKeywordRefiner {
    async fn refine(&self, request: &RefinementRequest) -> Result<Vec<String>, CapabilityError> {
        let value = self
            .client
            .complete_json(
                CAPABILITY_REFINER,
                &self.model,
                self.temperature,
                &prompts::refinement_system(request),
                &prompts::refinement_user(request),
            )
            .await?;
        parse_keywords(&value)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
