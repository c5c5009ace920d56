//! Integration tests for the keyword extraction pipeline (KW-01 through KW-11).

use std::sync::Arc;
use std::time::Duration;

use examkit_cache::ResultCache;
use examkit_core::config::KeywordConfig;
use examkit_core::errors::CapabilityError;
use examkit_core::models::{KeywordCandidate, KeywordCandidateSet, Provenance};
use examkit_keywords::KeywordExtractionPipeline;
use examkit_resilience::{Resilience, RetryPolicy};
use test_fixtures::{deadlock_question, FakeExtractor, FakeRefiner};

fn fast_resilience() -> Resilience {
    Resilience::new(
        RetryPolicy {
            timeout: Duration::from_millis(200),
            max_retries: 2,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(2),
        },
        3,
    )
}

fn pipeline(
    extractor: FakeExtractor,
    refiner: FakeRefiner,
) -> KeywordExtractionPipeline<FakeExtractor, FakeRefiner> {
    KeywordExtractionPipeline::new(
        extractor,
        refiner,
        Arc::new(ResultCache::in_memory(None)),
        fast_resilience(),
        KeywordConfig::default(),
    )
}

fn deadlock_candidates() -> KeywordCandidateSet {
    [
        KeywordCandidate::new("교착상태", 0.9),
        KeywordCandidate::new("의", 0.3),
        KeywordCandidate::new("순환대기", 0.8),
    ]
    .into_iter()
    .collect()
}

// KW-01: Generic term excluded even when the refiner echoes it back.
#[tokio::test]
async fn kw_01_generic_term_excluded() {
    let p = pipeline(FakeExtractor::returning(&[]), FakeRefiner::echo());
    let refined = p
        .refine(&deadlock_candidates(), "교착상태의 필요조건 중 순환대기")
        .await;
    assert_eq!(refined.provenance(), Provenance::Refined);
    assert!(refined.contains("교착상태"));
    assert!(refined.contains("순환대기"));
    assert!(!refined.contains("의"));
}

// KW-02: Untraceable terms are dropped individually, the rest survive.
#[tokio::test]
async fn kw_02_untraceable_terms_dropped_individually() {
    let p = pipeline(
        FakeExtractor::returning(&[]),
        FakeRefiner::returning(&["교착상태", "기아상태", "순환대기", "Spinlock"]),
    );
    let refined = p.refine(&deadlock_candidates(), "교착상태와 순환대기").await;
    assert_eq!(refined.terms(), ["교착상태", "순환대기"]);
    assert_eq!(refined.provenance(), Provenance::Refined);
}

// KW-03: Refiner outage degrades to top-K candidates by confidence.
#[tokio::test]
async fn kw_03_refiner_outage_degrades_to_top_k() {
    let p = pipeline(FakeExtractor::returning(&[]), FakeRefiner::unavailable());
    let refined = p.refine(&deadlock_candidates(), "교착상태").await;
    assert_eq!(refined.provenance(), Provenance::Degraded);
    assert_eq!(refined.terms(), ["교착상태", "순환대기"]);

    let events = p.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fallback_used, "top-k candidates");
    assert!(p.drain_events().is_empty());
}

// KW-04: A refiner reply with nothing valid also degrades.
#[tokio::test]
async fn kw_04_all_invalid_terms_degrade() {
    let p = pipeline(
        FakeExtractor::returning(&[]),
        FakeRefiner::returning(&["완전히 새로운 개념", "의"]),
    );
    let refined = p.refine(&deadlock_candidates(), "교착상태").await;
    assert!(refined.is_degraded());
    assert!(!refined.is_empty());
}

// KW-05: Malformed refiner output is not retried.
#[tokio::test]
async fn kw_05_malformed_refiner_output_not_retried() {
    let refiner = FakeRefiner::failing(CapabilityError::malformed("keyword-refiner", "not a list"));
    let p = pipeline(FakeExtractor::returning(&[]), refiner);
    let refined = p.refine(&deadlock_candidates(), "교착상태").await;
    assert!(refined.is_degraded());
    assert_eq!(p.refiner().calls(), 1);
}

// KW-06: Stage-1 results are cached by text hash.
#[tokio::test]
async fn kw_06_candidates_cached_by_text() {
    let p = pipeline(
        FakeExtractor::returning(&[("세마포어", 0.9)]),
        FakeRefiner::echo(),
    );
    let first = p.extract_candidates("세마포어는 동기화 도구").await;
    let second = p.extract_candidates("세마포어는 동기화 도구").await;
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(p.extractor().calls(), 1);

    p.extract_candidates("뮤텍스는 상호배제 도구").await;
    assert_eq!(p.extractor().calls(), 2);
}

// KW-07: Extractor outage falls back to the local frequency extractor.
#[tokio::test]
async fn kw_07_extractor_outage_uses_local_fallback() {
    let p = pipeline(FakeExtractor::unavailable(), FakeRefiner::echo());
    let candidates = p
        .extract_candidates("교착상태 순환대기 때문에 발생한다. 교착상태 예방")
        .await;
    assert_eq!(candidates.terms().next(), Some("교착상태"));

    let events = p.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fallback_used, "local-frequency");
}

// KW-08: Empty input makes no external call.
#[tokio::test]
async fn kw_08_empty_input_short_circuits() {
    let p = pipeline(FakeExtractor::returning(&[("x", 1.0)]), FakeRefiner::echo());
    let refined = p.extract("   ", "").await;
    assert!(refined.is_empty());
}

// KW-09: Question keywords come from text plus canonical answer.
#[tokio::test]
async fn kw_09_extract_for_question() {
    let p = pipeline(
        FakeExtractor::returning(&[("교착상태", 0.9), ("프로세스", 0.7), ("것", 0.6)]),
        FakeRefiner::returning(&["교착상태", "프로세스", "자원"]),
    );
    let refined = p.extract_for_question(&deadlock_question()).await;
    assert_eq!(refined.terms(), ["교착상태", "프로세스", "자원"]);
}

// KW-10: Output length never exceeds N.
#[tokio::test]
async fn kw_10_output_capped() {
    let config = KeywordConfig {
        max_keywords: 2,
        ..KeywordConfig::default()
    };
    let p = KeywordExtractionPipeline::new(
        FakeExtractor::returning(&[]),
        FakeRefiner::echo(),
        Arc::new(ResultCache::in_memory(None)),
        fast_resilience(),
        config,
    );
    let candidates: KeywordCandidateSet = ["a1", "b2", "c3", "d4"]
        .iter()
        .map(|t| KeywordCandidate::new(*t, 0.5))
        .collect();
    let refined = p.refine(&candidates, "a1 b2 c3 d4").await;
    assert_eq!(refined.len(), 2);
    assert_eq!(p.config().max_keywords, 2);
}

// KW-11: Breakers shared across a request stop calling a dead extractor.
#[tokio::test]
async fn kw_11_shared_breakers_skip_dead_extractor() {
    let p = pipeline(FakeExtractor::unavailable(), FakeRefiner::echo());
    let breakers = p.request_breakers();

    p.extract_with("교착상태 순환대기", "교착상태 예방", &breakers).await;
    assert_eq!(p.extractor().calls(), 3);
    assert!(breakers.extract().is_open());

    let second = p.extract_with("세마포어 동기화", "세마포어 동기화 도구", &breakers).await;
    assert_eq!(p.extractor().calls(), 3);
    assert!(!second.is_empty());
    assert!(p
        .drain_events()
        .iter()
        .any(|e| e.failure.contains("circuit open")));
}
