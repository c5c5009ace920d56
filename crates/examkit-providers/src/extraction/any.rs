//! Static dispatch over the configured extractor.

use examkit_core::errors::CapabilityError;
use examkit_core::models::KeywordCandidateSet;
use examkit_core::traits::IKeywordExtractor;

use super::{HttpKeyPhraseExtractor, LocalKeywordExtractor};

#[derive(Debug, Clone)]
pub enum AnyExtractor {
    Remote(HttpKeyPhraseExtractor),
    Local(LocalKeywordExtractor),
}

impl IKeywordExtractor for AnyExtractor {
    async fn extract_candidates(&self, text: &str) -> Result<KeywordCandidateSet, CapabilityError> {
        match self {
            Self::Remote(e) => e.extract_candidates(text).await,
            Self::Local(e) => e.extract_candidates(text).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Remote(e) => e.name(),
            Self::Local(e) => e.name(),
        }
    }
}
