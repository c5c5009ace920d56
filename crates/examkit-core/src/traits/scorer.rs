use crate::errors::CapabilityError;

/// Input to the similarity scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRequest {
    pub question_text: String,
    /// Numbered options, if the question has any.
    pub options: Option<String>,
    pub reference_text: String,
    pub candidate_text: String,
}

/// Scorer output. `score` is expected in [0, 1]; callers clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResponse {
    pub score: f64,
    pub rationale: Option<String>,
}

/// External semantic similarity capability.
#[allow(async_fn_in_trait)]
pub trait ISimilarityScorer: Send + Sync {
    /// Compare a candidate answer against the reference answer.
    async fn score(&self, request: &ScoringRequest) -> Result<ScoringResponse, CapabilityError>;

    /// Provider name for logs.
    fn name(&self) -> &str;
}
