use crate::errors::CapabilityError;
use crate::models::KeywordCandidateSet;

/// Coarse keyword extraction capability. May return an empty set.
#[allow(async_fn_in_trait)]
pub trait IKeywordExtractor: Send + Sync {
    async fn extract_candidates(&self, text: &str) -> Result<KeywordCandidateSet, CapabilityError>;

    fn name(&self) -> &str;
}
