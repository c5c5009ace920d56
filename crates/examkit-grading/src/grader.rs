//! AnswerGrader: rules, cache, scorer, fallback.

use std::sync::{Arc, Mutex};

use examkit_cache::ResultCache;
use examkit_core::config::GradingConfig;
use examkit_core::constants::CAPABILITY_SCORER;
use examkit_core::errors::{CacheError, CapabilityError, ExamkitResult, ValidationError};
use examkit_core::hashing::content_key;
use examkit_core::models::{
    DegradationEvent, GradingMethod, GradingResult, Question, UserAnswer, Verdict,
};
use examkit_core::text::normalize;
use examkit_core::traits::{ISimilarityScorer, ScoringRequest, ScoringResponse};
use examkit_resilience::{CircuitBreaker, Resilience};
use tracing::{debug, info, warn};

use crate::lexical::lexical_score;
use crate::rules::{check_rules, RuleMatch};

const COMPONENT: &str = "grading";
const LEXICAL_FALLBACK: &str = "lexical-overlap";

/// Cache key for an answer to `question`: id, canonical answer, and the
/// normalized answer text.
pub fn grading_key(question: &Question, answer_text: &str) -> String {
    let id = question.id.to_string();
    content_key(
        "grade",
        &[&id, question.answer.trim(), &normalize(answer_text)],
    )
}

/// Grades answers with an external similarity scorer, falling back to
/// lexical overlap when the scorer cannot be reached.
///
/// Scored results are write-once cached, including lexical fallbacks
/// produced while the scorer was down. A cached result is returned with
/// the caller's own answer attached.
pub struct AnswerGrader<S> {
    scorer: S,
    cache: Arc<ResultCache<GradingResult>>,
    resilience: Resilience,
    config: GradingConfig,
    events: Mutex<Vec<DegradationEvent>>,
}

impl<S: ISimilarityScorer> AnswerGrader<S> {
    pub fn new(
        scorer: S,
        cache: Arc<ResultCache<GradingResult>>,
        resilience: Resilience,
        config: GradingConfig,
    ) -> Self {
        Self {
            scorer,
            cache,
            resilience,
            config,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Grade `answer` against `question`.
    ///
    /// Fails only when the answer belongs to another question or when the
    /// cache already holds a conflicting result for the same key.
    pub async fn grade(
        &self,
        question: &Question,
        answer: &UserAnswer,
    ) -> ExamkitResult<GradingResult> {
        self.grade_with(question, answer, &self.request_breaker())
            .await
    }

    /// A breaker for one request's scorer calls.
    pub fn request_breaker(&self) -> CircuitBreaker {
        self.resilience.breaker()
    }

    /// Like [`grade`](Self::grade), with scorer calls guarded by a breaker
    /// shared across the request. Once it opens, later answers go straight
    /// to the lexical fallback.
    pub async fn grade_with(
        &self,
        question: &Question,
        answer: &UserAnswer,
        breaker: &CircuitBreaker,
    ) -> ExamkitResult<GradingResult> {
        if answer.question_id != question.id {
            return Err(ValidationError::InvalidQuestionId {
                id: answer.question_id.to_string(),
                reason: format!("answer submitted for question {}", question.id),
            }
            .into());
        }

        if answer.is_blank() {
            debug!(question = %question.id, "blank answer");
            return Ok(GradingResult {
                answer: answer.clone(),
                score: 0.0,
                verdict: Verdict::Incorrect,
                method: GradingMethod::FallbackLexical,
                rationale: None,
            });
        }

        if self.config.rule_checks {
            if let Some(rule) = check_rules(question, &answer.text) {
                debug!(question = %question.id, rule = ?rule, "answer decided by rule");
                return Ok(self.rule_result(answer, rule));
            }
        }

        let key = grading_key(question, &answer.text);
        if let Some(cached) = self.cache.get(&key) {
            debug!(question = %question.id, key = %key, "grading cache hit");
            return Ok(GradingResult {
                answer: answer.clone(),
                ..cached
            });
        }

        let result = self.score(question, answer, breaker).await;
        info!(
            question = %question.id,
            score = result.score,
            verdict = ?result.verdict,
            method = ?result.method,
            "answer graded"
        );
        self.store(&key, result)
    }

    fn rule_result(&self, answer: &UserAnswer, rule: RuleMatch) -> GradingResult {
        let score = if rule.is_correct() {
            1.0
        } else {
            self.config.missing_acronym_score
        };
        GradingResult {
            answer: answer.clone(),
            score,
            verdict: self.verdict(score),
            method: GradingMethod::Rule,
            rationale: Some(rule.rationale().to_string()),
        }
    }

    async fn score(
        &self,
        question: &Question,
        answer: &UserAnswer,
        breaker: &CircuitBreaker,
    ) -> GradingResult {
        let request = ScoringRequest {
            question_text: question.text.clone(),
            options: question.example.clone(),
            reference_text: question.answer.clone(),
            candidate_text: answer.text.clone(),
        };

        let first = match self.call_scorer(&request, breaker).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    question = %question.id,
                    scorer = self.scorer.name(),
                    error = %e,
                    "scorer unreachable, using lexical fallback"
                );
                self.record_event(&e, LEXICAL_FALLBACK);
                return self.lexical_result(question, answer);
            }
        };

        let mut score = first.score.clamp(0.0, 1.0);
        let mut rationale = first.rationale;

        if self.config.second_pass && self.verdict(score) == Verdict::Uncertain {
            match self.call_scorer(&request, breaker).await {
                Ok(second) => {
                    let second_score = second.score.clamp(0.0, 1.0);
                    debug!(
                        question = %question.id,
                        first = score,
                        second = second_score,
                        "second pass in uncertain band"
                    );
                    score = (score + second_score) / 2.0;
                    rationale = second.rationale.or(rationale);
                }
                Err(e) => {
                    warn!(question = %question.id, error = %e, "second pass failed, keeping first score");
                }
            }
        }

        GradingResult {
            answer: answer.clone(),
            score,
            verdict: self.verdict(score),
            method: GradingMethod::Llm,
            rationale,
        }
    }

    async fn call_scorer(
        &self,
        request: &ScoringRequest,
        breaker: &CircuitBreaker,
    ) -> Result<ScoringResponse, CapabilityError> {
        self.resilience
            .call(breaker, CAPABILITY_SCORER, || self.scorer.score(request))
            .await
    }

    fn lexical_result(&self, question: &Question, answer: &UserAnswer) -> GradingResult {
        let score = lexical_score(
            &answer.text,
            &question.answer,
            self.config.sequence_weight,
            self.config.recall_weight,
        );
        GradingResult {
            answer: answer.clone(),
            score,
            verdict: self.verdict(score),
            method: GradingMethod::FallbackLexical,
            rationale: None,
        }
    }

    /// Write-once store. A collision with an equivalent answer adopts the
    /// stored grade under this caller's answer; any other collision is an
    /// error.
    fn store(&self, key: &str, result: GradingResult) -> ExamkitResult<GradingResult> {
        match self.cache.put(key, result.clone()) {
            Ok(()) => Ok(result),
            Err(CacheError::KeyCollision { key }) => match self.cache.get(&key) {
                Some(stored) if same_answer(&stored.answer, &result.answer) => {
                    debug!(key = %key, "grading cache collision, adopting stored result");
                    Ok(GradingResult {
                        answer: result.answer,
                        ..stored
                    })
                }
                _ => Err(CacheError::KeyCollision { key }.into()),
            },
            Err(e) => {
                warn!(key, error = %e, "grading cache write failed");
                Ok(result)
            }
        }
    }

    fn verdict(&self, score: f64) -> Verdict {
        Verdict::from_score(score, self.config.threshold, self.config.uncertain_margin)
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

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

fn same_answer(a: &UserAnswer, b: &UserAnswer) -> bool {
    a.question_id == b.question_id && normalize(&a.text) == normalize(&b.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{deadlock_question, FakeScorer};

    fn grader() -> AnswerGrader<FakeScorer> {
        AnswerGrader::new(
            FakeScorer::always(0.9),
            Arc::new(ResultCache::in_memory(None)),
            Resilience::default(),
            GradingConfig::default(),
        )
    }

    fn result_for(answer: UserAnswer, score: f64) -> GradingResult {
        GradingResult {
            answer,
            score,
            verdict: Verdict::from_score(score, 0.7, 0.1),
            method: GradingMethod::Llm,
            rationale: None,
        }
    }

    #[test]
    fn collision_with_equivalent_answer_converges() {
        let g = grader();
        let q = deadlock_question();
        let answer = UserAnswer::new(q.id.clone(), "자원을 서로 기다림");
        let key = grading_key(&q, &answer.text);

        g.cache.put(&key, result_for(answer.clone(), 0.8)).unwrap();
        let racing = UserAnswer::new(q.id.clone(), "자원을 서로  기다림!");
        let adopted = g.store(&key, result_for(racing.clone(), 0.6)).unwrap();
        assert_eq!(adopted.score, 0.8);
        assert_eq!(adopted.answer, racing);
    }

    #[test]
    fn collision_with_different_answer_fails() {
        let g = grader();
        let q = deadlock_question();
        let key = grading_key(&q, "첫 번째 답");

        g.cache
            .put(&key, result_for(UserAnswer::new(q.id.clone(), "첫 번째 답"), 0.8))
            .unwrap();
        let other = result_for(UserAnswer::new(q.id.clone(), "전혀 다른 답"), 0.2);
        assert!(g.store(&key, other).is_err());
    }

    #[test]
    fn key_ignores_case_and_punctuation() {
        let q = deadlock_question();
        assert_eq!(grading_key(&q, "Circular Wait!"), grading_key(&q, "circular   wait"));
        assert_ne!(grading_key(&q, "circular wait"), grading_key(&q, "hold and wait"));
    }
}
