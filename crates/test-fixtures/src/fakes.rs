use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use examkit_core::errors::CapabilityError;
use examkit_core::models::{KeywordCandidate, KeywordCandidateSet};
use examkit_core::traits::{
    IKeywordExtractor, IKeywordRefiner, ISimilarityScorer, RefinementRequest, ScoringRequest,
    ScoringResponse,
};

/// Replays queued results, then repeats a fallback result forever.
struct Script<T> {
    queue: Mutex<VecDeque<Result<T, CapabilityError>>>,
    fallback: Result<T, CapabilityError>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl<T: Clone> Script<T> {
    fn new(fallback: Result<T, CapabilityError>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback,
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    async fn next(&self) -> Result<T, CapabilityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let queued = self.queue.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| self.fallback.clone())
    }
}

fn unavailable(capability: &str) -> CapabilityError {
    CapabilityError::unavailable(capability, "fake outage")
}

// --- Scorer ---

pub struct FakeScorer {
    script: Script<ScoringResponse>,
    requests: Mutex<Vec<ScoringRequest>>,
}

impl FakeScorer {
    /// Always returns `score`.
    pub fn always(score: f64) -> Self {
        Self::with_fallback(Ok(ScoringResponse {
            score,
            rationale: Some("fake rationale".to_string()),
        }))
    }

    /// Always fails with a retryable outage.
    pub fn unavailable() -> Self {
        Self::with_fallback(Err(unavailable("similarity-scorer")))
    }

    pub fn failing(error: CapabilityError) -> Self {
        Self::with_fallback(Err(error))
    }

    /// Returns `scores` in order, then repeats the last one.
    pub fn sequence(scores: &[f64]) -> Self {
        let last = scores.last().copied().unwrap_or(0.0);
        let fake = Self::always(last);
        {
            let mut queue = fake.script.queue.lock().unwrap();
            for score in scores {
                queue.push_back(Ok(ScoringResponse {
                    score: *score,
                    rationale: None,
                }));
            }
        }
        fake
    }

    fn with_fallback(fallback: Result<ScoringResponse, CapabilityError>) -> Self {
        Self {
            script: Script::new(fallback),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sleep this long before every reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ScoringRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl ISimilarityScorer for FakeScorer {
    async fn score(&self, request: &ScoringRequest) -> Result<ScoringResponse, CapabilityError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script.next().await
    }

    fn name(&self) -> &str {
        "fake-scorer"
    }
}

// --- Extractor ---

pub struct FakeExtractor {
    script: Script<KeywordCandidateSet>,
}

impl FakeExtractor {
    /// Always returns the given (term, confidence) pairs.
    pub fn returning(pairs: &[(&str, f64)]) -> Self {
        let set = pairs
            .iter()
            .map(|(term, confidence)| KeywordCandidate::new(*term, *confidence))
            .collect();
        Self {
            script: Script::new(Ok(set)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            script: Script::new(Err(unavailable("keyword-extractor"))),
        }
    }

    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }
}

impl IKeywordExtractor for FakeExtractor {
    async fn extract_candidates(&self, _text: &str) -> Result<KeywordCandidateSet, CapabilityError> {
        self.script.next().await
    }

    fn name(&self) -> &str {
        "fake-extractor"
    }
}

// --- Refiner ---

pub struct FakeRefiner {
    script: Script<Vec<String>>,
    requests: Mutex<Vec<RefinementRequest>>,
    echo: bool,
}

impl FakeRefiner {
    fn with_fallback(fallback: Result<Vec<String>, CapabilityError>) -> Self {
        Self {
            script: Script::new(fallback),
            requests: Mutex::new(Vec::new()),
            echo: false,
        }
    }

    pub fn returning(terms: &[&str]) -> Self {
        Self::with_fallback(Ok(terms.iter().map(|t| t.to_string()).collect()))
    }

    /// Echoes the candidate terms back unchanged.
    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::with_fallback(Ok(Vec::new()))
        }
    }

    pub fn unavailable() -> Self {
        Self::with_fallback(Err(unavailable("keyword-refiner")))
    }

    pub fn failing(error: CapabilityError) -> Self {
        Self::with_fallback(Err(error))
    }

    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RefinementRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl IKeywordRefiner for FakeRefiner {
    async fn refine(&self, request: &RefinementRequest) -> Result<Vec<String>, CapabilityError> {
        self.requests.lock().unwrap().push(request.clone());
        let result = self.script.next().await;
        if self.echo {
            return Ok(request.candidate_terms.clone());
        }
        result
    }

    fn name(&self) -> &str {
        "fake-refiner"
    }
}
