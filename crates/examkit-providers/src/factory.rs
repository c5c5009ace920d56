//! Build capability clients from configuration.

use examkit_core::config::ProviderConfig;
use tracing::{info, warn};

use crate::chat::{ChatClient, LlmKeywordRefiner, LlmSimilarityScorer};
use crate::extraction::{AnyExtractor, HttpKeyPhraseExtractor, LocalKeywordExtractor};

fn chat_client(config: &ProviderConfig) -> ChatClient {
    if config.api_key.is_none() {
        warn!(
            endpoint = %config.chat_endpoint,
            "no API key configured; chat calls will likely be rejected and fall back"
        );
    }
    ChatClient::new(config.chat_endpoint.clone(), config.api_key.clone())
}

pub fn create_scorer(config: &ProviderConfig) -> LlmSimilarityScorer {
    info!(provider = "chat", model = %config.scoring_model, "similarity scorer configured");
    LlmSimilarityScorer::new(chat_client(config), config.scoring_model.clone(), config.temperature)
}

pub fn create_refiner(config: &ProviderConfig) -> LlmKeywordRefiner {
    info!(provider = "chat", model = %config.refine_model, "keyword refiner configured");
    LlmKeywordRefiner::new(chat_client(config), config.refine_model.clone(), config.temperature)
}

/// Remote key-phrase service when an endpoint is set, local extractor otherwise.
pub fn create_extractor(config: &ProviderConfig) -> AnyExtractor {
    match &config.key_phrase_endpoint {
        Some(url) => {
            info!(provider = "key-phrase-service", url = %url, "keyword extractor configured");
            AnyExtractor::Remote(HttpKeyPhraseExtractor::new(
                url,
                config.language.clone(),
                config.api_key.clone(),
            ))
        }
        None => {
            info!(provider = "local-frequency", "no key-phrase endpoint, using local extractor");
            AnyExtractor::Local(LocalKeywordExtractor::default())
        }
    }
}
