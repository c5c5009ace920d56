//! Similarity scoring over chat completions.

use examkit_core::constants::CAPABILITY_SCORER;
use examkit_core::errors::CapabilityError;
use examkit_core::traits::{ISimilarityScorer, ScoringRequest, ScoringResponse};
use serde_json::Value;

use super::client::ChatClient;
use super::prompts;

/// Scores answers by asking a chat model for a 0-100 similarity.
#[derive(Debug, Clone)]
pub struct LlmSimilarityScorer {
    client: ChatClient,
    model: String,
    temperature: f64,
}

impl LlmSimilarityScorer {
    pub fn new(client: ChatClient, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }
}

/// Extract `{"score": 0-100, "feedback": ...}` and normalize to [0, 1].
pub(crate) fn parse_scoring(value: &Value) -> Result<ScoringResponse, CapabilityError> {
    let raw = match value.get("score") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| CapabilityError::malformed(CAPABILITY_SCORER, "score missing or non-numeric"))?;

    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(CapabilityError::malformed(
            CAPABILITY_SCORER,
            format!("score {raw} outside 0-100"),
        ));
    }

    let rationale = value
        .get("feedback")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(ScoringResponse {
        score: raw / 100.0,
        rationale,
    })
}

impl ISimilarityScorer for LlmSimilarityScorer {
    async fn score(&self, request: &ScoringRequest) -> Result<ScoringResponse, CapabilityError> {
        let value = self
            .client
            .complete_json(
                CAPABILITY_SCORER,
                &self.model,
                self.temperature,
                prompts::SCORING_SYSTEM,
                &prompts::scoring_user(request),
            )
            .await?;
        parse_scoring(&value)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
