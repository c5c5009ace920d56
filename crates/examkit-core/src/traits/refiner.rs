use crate::errors::CapabilityError;

/// Input to the refinement capability.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementRequest {
    pub candidate_terms: Vec<String>,
    pub source_text: String,
    /// Filtering instruction (generic terms to drop, length cap).
    pub instruction: String,
    pub max_terms: usize,
}

/// Language-model keyword refinement. Returns an ordered term list.
#[allow(async_fn_in_trait)]
pub trait IKeywordRefiner: Send + Sync {
    async fn refine(&self, request: &RefinementRequest) -> Result<Vec<String>, CapabilityError>;

    fn name(&self) -> &str;
}
