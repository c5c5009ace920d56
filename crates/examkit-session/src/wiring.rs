//! Assemble a live session from configuration.

use std::sync::Arc;

use examkit_cache::ResultCache;
use examkit_core::config::ExamkitConfig;
use examkit_core::errors::ExamkitResult;
use examkit_grading::AnswerGrader;
use examkit_keywords::KeywordExtractionPipeline;
use examkit_providers::{
    create_extractor, create_refiner, create_scorer, AnyExtractor, LlmKeywordRefiner,
    LlmSimilarityScorer,
};
use examkit_recommend::RecommendationEngine;
use examkit_resilience::Resilience;
use examkit_storage::StorageEngine;
use tracing::info;

use crate::session::StudySession;

/// A session backed by the configured providers and SQLite storage.
pub type LiveSession = StudySession<
    LlmSimilarityScorer,
    AnyExtractor,
    LlmKeywordRefiner,
    StorageEngine,
    StorageEngine,
>;

/// Build every component from `config`. Grading results and coarse
/// candidates share one cache configuration; their keys are namespaced.
pub fn build_session(config: &ExamkitConfig) -> ExamkitResult<LiveSession> {
    config.validate()?;

    let storage = Arc::new(StorageEngine::from_config(&config.storage)?);
    let resilience = Resilience::from_config(&config.resilience);

    let grader = AnswerGrader::new(
        create_scorer(&config.providers),
        Arc::new(ResultCache::from_config(&config.cache)?),
        resilience.clone(),
        config.grading.clone(),
    );
    let keywords = KeywordExtractionPipeline::new(
        create_extractor(&config.providers),
        create_refiner(&config.providers),
        Arc::new(ResultCache::from_config(&config.cache)?),
        resilience,
        config.keywords.clone(),
    );

    info!(
        db = %config.storage.db_path,
        l2_cache = config.cache.l2_enabled,
        "study session assembled"
    );
    Ok(StudySession::new(
        grader,
        keywords,
        RecommendationEngine::new(config.recommendation.clone()),
        Arc::clone(&storage),
        storage,
        config.session.clone(),
    ))
}
