//! Keyword extraction pipeline.

use std::sync::{Arc, Mutex};

use examkit_cache::ResultCache;
use examkit_core::config::KeywordConfig;
use examkit_core::constants::{CAPABILITY_EXTRACTOR, CAPABILITY_REFINER};
use examkit_core::errors::{CacheError, CapabilityError, ValidationError};
use examkit_core::hashing::content_key;
use examkit_core::models::{
    DegradationEvent, KeywordCandidateSet, Provenance, Question, RefinedKeywordSet,
};
use examkit_core::text::{normalize_term, truncate_chars};
use examkit_core::traits::{IKeywordExtractor, IKeywordRefiner, RefinementRequest};
use examkit_providers::LocalKeywordExtractor;
use examkit_resilience::{CircuitBreaker, Resilience};
use tracing::{debug, info, warn};

use crate::degrade;
use crate::instruction::refinement_instruction;
use crate::validation::{is_traceable, StopList};

const COMPONENT: &str = "keywords";

/// Breakers for one request's extractor and refiner calls.
pub struct StageBreakers {
    extract: CircuitBreaker,
    refine: CircuitBreaker,
}

impl StageBreakers {
    pub fn extract(&self) -> &CircuitBreaker {
        &self.extract
    }

    pub fn refine(&self) -> &CircuitBreaker {
        &self.refine
    }
}

/// Coarse extraction → refinement → validation, with degradation at
/// each stage. Never fails: the worst case is a degraded or empty set.
pub struct KeywordExtractionPipeline<E, R> {
    extractor: E,
    refiner: R,
    fallback: LocalKeywordExtractor,
    cache: Arc<ResultCache<KeywordCandidateSet>>,
    resilience: Resilience,
    config: KeywordConfig,
    stop_list: StopList,
    instruction: String,
    events: Mutex<Vec<DegradationEvent>>,
}

impl<E, R> KeywordExtractionPipeline<E, R>
where
    E: IKeywordExtractor,
    R: IKeywordRefiner,
{
    pub fn new(
        extractor: E,
        refiner: R,
        cache: Arc<ResultCache<KeywordCandidateSet>>,
        resilience: Resilience,
        config: KeywordConfig,
    ) -> Self {
        Self {
            extractor,
            refiner,
            fallback: LocalKeywordExtractor::new(config.degraded_top_k),
            cache,
            resilience,
            stop_list: StopList::new(&config.generic_terms),
            instruction: refinement_instruction(&config.generic_terms),
            config,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Stage 1: coarse candidates for `text`, cached by text hash.
    ///
    /// On extractor failure the local frequency extractor is used (when
    /// enabled); its output is not cached.
    pub async fn extract_candidates(&self, text: &str) -> KeywordCandidateSet {
        self.extract_candidates_with(text, &self.resilience.breaker())
            .await
    }

    async fn extract_candidates_with(
        &self,
        text: &str,
        breaker: &CircuitBreaker,
    ) -> KeywordCandidateSet {
        let text = truncate_chars(text.trim(), self.config.max_source_chars);
        if text.is_empty() {
            return KeywordCandidateSet::default();
        }

        let key = content_key("candidates", &[text]);
        if let Some(cached) = self.cache.get(&key) {
            debug!(key = %key, candidates = cached.len(), "candidate cache hit");
            return cached;
        }

        let result = self
            .resilience
            .call(breaker, CAPABILITY_EXTRACTOR, || {
                self.extractor.extract_candidates(text)
            })
            .await;

        match result {
            Ok(candidates) => self.store_candidates(&key, candidates),
            Err(e) => {
                warn!(
                    extractor = self.extractor.name(),
                    error = %e,
                    "coarse extraction failed"
                );
                if self.config.local_fallback {
                    self.record_event(&e, self.fallback.name());
                    self.fallback.extract(text)
                } else {
                    self.record_event(&e, "empty candidate set");
                    KeywordCandidateSet::default()
                }
            }
        }
    }

    /// Cache fresh candidates. A concurrent writer's value wins.
    fn store_candidates(&self, key: &str, candidates: KeywordCandidateSet) -> KeywordCandidateSet {
        match self.cache.put(key, candidates.clone()) {
            Ok(()) => candidates,
            Err(CacheError::KeyCollision { .. }) => {
                debug!(key, "candidate cache collision, adopting stored value");
                self.cache.get(key).unwrap_or(candidates)
            }
            Err(e) => {
                warn!(key, error = %e, "candidate cache write failed");
                candidates
            }
        }
    }

    /// Stage 2: refine candidates against `source_text`.
    pub async fn refine(
        &self,
        candidates: &KeywordCandidateSet,
        source_text: &str,
    ) -> RefinedKeywordSet {
        self.refine_with(candidates, source_text, &self.resilience.breaker())
            .await
    }

    async fn refine_with(
        &self,
        candidates: &KeywordCandidateSet,
        source_text: &str,
        breaker: &CircuitBreaker,
    ) -> RefinedKeywordSet {
        if candidates.is_empty() {
            return RefinedKeywordSet::empty(Provenance::Degraded);
        }

        let mut candidate_terms: Vec<String> = Vec::new();
        for candidate in candidates.by_confidence() {
            let term = candidate.term.trim().to_string();
            if !term.is_empty() && !candidate_terms.contains(&term) {
                candidate_terms.push(term);
            }
        }

        let request = RefinementRequest {
            candidate_terms,
            source_text: source_text.to_string(),
            instruction: self.instruction.clone(),
            max_terms: self.config.max_keywords,
        };

        let result = self
            .resilience
            .call(breaker, CAPABILITY_REFINER, || self.refiner.refine(&request))
            .await;

        match result {
            Ok(terms) => {
                let refined = self.validate(terms, &request.candidate_terms, source_text);
                if refined.is_empty() {
                    warn!(
                        refiner = self.refiner.name(),
                        "refinement produced no valid terms, degrading to top candidates"
                    );
                    self.record_event(
                        &CapabilityError::malformed(CAPABILITY_REFINER, "no valid terms"),
                        "top-k candidates",
                    );
                    self.degrade(candidates)
                } else {
                    refined
                }
            }
            Err(e) => {
                warn!(
                    refiner = self.refiner.name(),
                    error = %e,
                    "refinement failed, degrading to top candidates"
                );
                self.record_event(&e, "top-k candidates");
                self.degrade(candidates)
            }
        }
    }

    /// Keep traceable, non-generic terms. Each rejected term is logged.
    fn validate(
        &self,
        terms: Vec<String>,
        candidate_terms: &[String],
        source_text: &str,
    ) -> RefinedKeywordSet {
        let kept = terms.into_iter().filter(|term| {
            let normalized = normalize_term(term);
            if normalized.is_empty() {
                return false;
            }
            if self.stop_list.contains(&normalized) {
                debug!(term = %normalized, "dropping generic term");
                return false;
            }
            if !is_traceable(&normalized, candidate_terms, source_text) {
                let failure = ValidationError::UntraceableTerm {
                    term: normalized.clone(),
                };
                warn!(error = %failure, "dropping refined term");
                return false;
            }
            true
        });
        RefinedKeywordSet::from_terms(kept, Provenance::Refined, self.config.max_keywords)
    }

    fn degrade(&self, candidates: &KeywordCandidateSet) -> RefinedKeywordSet {
        degrade::top_k(
            candidates,
            &self.stop_list,
            self.config.degraded_top_k,
            self.config.max_keywords,
        )
    }

    /// Keywords for a wrong answer: both stages over the user's answer
    /// plus the reference answer, validated against both.
    pub async fn extract(&self, answer_text: &str, reference_text: &str) -> RefinedKeywordSet {
        self.extract_with(answer_text, reference_text, &self.request_breakers())
            .await
    }

    /// Like [`extract`](Self::extract), reusing breakers shared across the
    /// request.
    pub async fn extract_with(
        &self,
        answer_text: &str,
        reference_text: &str,
        breakers: &StageBreakers,
    ) -> RefinedKeywordSet {
        let source = format!("{}\n{}", answer_text.trim(), reference_text.trim());
        self.run(&source, breakers).await
    }

    pub fn request_breakers(&self) -> StageBreakers {
        StageBreakers {
            extract: self.resilience.breaker(),
            refine: self.resilience.breaker(),
        }
    }

    /// Keywords for a bank question, from its text and canonical answer.
    pub async fn extract_for_question(&self, question: &Question) -> RefinedKeywordSet {
        let source = format!("{}\n{}", question.text.trim(), question.answer.trim());
        let keywords = self.run(&source, &self.request_breakers()).await;
        info!(
            question = %question.id,
            keywords = keywords.len(),
            provenance = ?keywords.provenance(),
            "question keywords extracted"
        );
        keywords
    }

    async fn run(&self, source: &str, breakers: &StageBreakers) -> RefinedKeywordSet {
        let candidates = self.extract_candidates_with(source, &breakers.extract).await;
        self.refine_with(&candidates, source, &breakers.refine).await
    }

    fn record_event(&self, failure: &CapabilityError, fallback_used: &str) {
        let mut events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.push(DegradationEvent::now(COMPONENT, failure.to_string(), fallback_used));
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        std::mem::take(&mut *events)
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn refiner(&self) -> &R {
        &self.refiner
    }
}
