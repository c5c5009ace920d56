//! StudySession: the submit → grade → extract → record → recommend flow.

use std::collections::HashMap;
use std::sync::Arc;

use examkit_core::config::SessionConfig;
use examkit_core::errors::{ExamkitResult, ValidationError};
use examkit_core::models::{
    DegradationEvent, ExamReport, GradingResult, Question, QuestionId, RecommendationList,
    RefinedKeywordSet, UserAnswer, Verdict, WrongAnswerRecord,
};
use examkit_core::traits::{
    IKeywordExtractor, IKeywordRefiner, IQuestionBank, IQuestionEditor, ISimilarityScorer,
    IWrongAnswerStore,
};
use examkit_grading::AnswerGrader;
use examkit_keywords::{KeywordExtractionPipeline, StageBreakers};
use examkit_recommend::RecommendationEngine;
use examkit_resilience::CircuitBreaker;
use futures::future::join_all;
use tracing::{debug, info, warn, Instrument};

use crate::{backfill_span, exam_span, submission_span};

/// What a single submission produced.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub result: GradingResult,
    /// Present only for incorrect answers.
    pub keywords: Option<RefinedKeywordSet>,
    /// Empty unless the answer was incorrect.
    pub recommendations: RecommendationList,
}

impl SubmissionOutcome {
    pub fn is_correct(&self) -> bool {
        self.result.is_correct()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    pub updated: usize,
    /// Questions that already had keywords or got an empty set.
    pub skipped: usize,
}

/// Circuit breakers for every capability one request touches.
struct RequestBreakers {
    scorer: CircuitBreaker,
    keywords: StageBreakers,
}

pub struct StudySession<S, E, R, B, W> {
    grader: AnswerGrader<S>,
    keywords: KeywordExtractionPipeline<E, R>,
    recommender: RecommendationEngine,
    bank: Arc<B>,
    store: Arc<W>,
    config: SessionConfig,
}

impl<S, E, R, B, W> StudySession<S, E, R, B, W>
where
    S: ISimilarityScorer,
    E: IKeywordExtractor,
    R: IKeywordRefiner,
    B: IQuestionBank,
    W: IWrongAnswerStore,
{
    pub fn new(
        grader: AnswerGrader<S>,
        keywords: KeywordExtractionPipeline<E, R>,
        recommender: RecommendationEngine,
        bank: Arc<B>,
        store: Arc<W>,
        config: SessionConfig,
    ) -> Self {
        Self {
            grader,
            keywords,
            recommender,
            bank,
            store,
            config,
        }
    }

    fn request_breakers(&self) -> RequestBreakers {
        RequestBreakers {
            scorer: self.grader.request_breaker(),
            keywords: self.keywords.request_breakers(),
        }
    }

    fn question(&self, id: &QuestionId) -> ExamkitResult<Question> {
        self.bank
            .get_question(id)?
            .ok_or_else(|| ValidationError::MissingQuestion { id: id.to_string() }.into())
    }

    /// Grade one answer. An incorrect answer is recorded with its refined
    /// keywords and yields recommendations related to the question.
    pub async fn submit(&self, user_id: &str, answer: UserAnswer) -> ExamkitResult<SubmissionOutcome> {
        let span = submission_span!(user_id, answer.question_id);
        let breakers = self.request_breakers();
        self.submit_inner(user_id, answer, &breakers)
            .instrument(span)
            .await
    }

    async fn submit_inner(
        &self,
        user_id: &str,
        answer: UserAnswer,
        breakers: &RequestBreakers,
    ) -> ExamkitResult<SubmissionOutcome> {
        let question = self.question(&answer.question_id)?;
        let result = self
            .grader
            .grade_with(&question, &answer, &breakers.scorer)
            .await?;

        if result.verdict != Verdict::Incorrect {
            debug!(verdict = ?result.verdict, "no record for non-incorrect verdict");
            return Ok(SubmissionOutcome {
                result,
                keywords: None,
                recommendations: RecommendationList::default(),
            });
        }

        let keywords = self
            .keywords
            .extract_with(&answer.text, &question.answer, &breakers.keywords)
            .await;
        let record = WrongAnswerRecord::new(user_id, answer, keywords.clone());
        self.store.record_wrong_answer(&record)?;

        let recommendations =
            self.recommender
                .recommend_default(&keywords, &question.id, self.bank.as_ref())?;
        info!(
            keywords = keywords.len(),
            degraded = keywords.is_degraded(),
            recommended = recommendations.len(),
            "wrong answer processed"
        );

        Ok(SubmissionOutcome {
            result,
            keywords: Some(keywords),
            recommendations,
        })
    }

    /// Grade a whole test concurrently and score it. All answers share one
    /// set of breakers, so a dead capability is abandoned for the rest of
    /// the exam.
    pub async fn grade_exam(&self, user_id: &str, answers: Vec<UserAnswer>) -> ExamkitResult<ExamReport> {
        let span = exam_span!(user_id, answers.len());
        let breakers = self.request_breakers();
        async move {
            let outcomes = join_all(
                answers
                    .into_iter()
                    .map(|a| self.submit_inner(user_id, a, &breakers)),
            )
            .await;
            let results = outcomes
                .into_iter()
                .map(|o| o.map(|outcome| outcome.result))
                .collect::<ExamkitResult<Vec<_>>>()?;
            let report = ExamReport::from_results(
                results,
                self.config.points_per_correct,
                self.config.pass_mark,
            );
            info!(
                correct = report.correct,
                total = report.total,
                points = report.points,
                passed = report.passed,
                "exam graded"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }

    /// Build a test of `total` questions: `ceil(total * wrong_ratio)` from
    /// the user's most-missed questions, the rest from history-based
    /// recommendations, then unseen bank questions in id order.
    pub fn personalized_test(&self, user_id: &str, total: usize) -> ExamkitResult<Vec<Question>> {
        if total < self.config.min_test_questions || total > self.config.max_test_questions {
            return Err(ValidationError::InvalidLimit {
                value: total,
                max: self.config.max_test_questions,
            }
            .into());
        }

        let wrong_quota = ((total as f64) * self.config.wrong_ratio).ceil() as usize;
        let mut chosen: Vec<Question> = Vec::with_capacity(total);

        for id in self.most_missed(user_id)?.into_iter().take(wrong_quota.min(total)) {
            match self.bank.get_question(&id)? {
                Some(q) => chosen.push(q),
                None => warn!(question = %id, "missed question no longer in bank"),
            }
        }

        let remaining = total - chosen.len();
        if remaining > 0 {
            let limit = remaining.min(self.recommender.config().max_limit);
            let recommended = self.recommender.recommend_from_history(
                user_id,
                self.store.as_ref(),
                self.bank.as_ref(),
                limit,
            )?;
            for id in recommended.ids() {
                if let Some(q) = self.bank.get_question(id)? {
                    push_unique(&mut chosen, q);
                }
            }
        }

        if chosen.len() < total {
            for q in self.bank.list_all()? {
                if chosen.len() == total {
                    break;
                }
                push_unique(&mut chosen, q);
            }
        }

        debug!(user = user_id, requested = total, built = chosen.len(), "personalized test built");
        Ok(chosen)
    }

    /// Distinct missed question ids, most attempts first, then id.
    fn most_missed(&self, user_id: &str) -> ExamkitResult<Vec<QuestionId>> {
        let mut counts: HashMap<QuestionId, u32> = HashMap::new();
        for record in self.store.list_wrong_answers(user_id)? {
            *counts.entry(record.question_id).or_insert(0) += 1;
        }
        let mut ids: Vec<(QuestionId, u32)> = counts.into_iter().collect();
        ids.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ids.into_iter().map(|(id, _)| id).collect())
    }

    /// Degradation events from grading and keyword extraction.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.grader.drain_events();
        events.extend(self.keywords.drain_events());
        events.sort_by_key(|e| e.timestamp);
        events
    }

    pub fn grader(&self) -> &AnswerGrader<S> {
        &self.grader
    }

    pub fn keywords(&self) -> &KeywordExtractionPipeline<E, R> {
        &self.keywords
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn store(&self) -> &W {
        &self.store
    }
}

impl<S, E, R, B, W> StudySession<S, E, R, B, W>
where
    S: ISimilarityScorer,
    E: IKeywordExtractor,
    R: IKeywordRefiner,
    B: IQuestionEditor,
    W: IWrongAnswerStore,
{
    /// Extract and store keywords for bank questions. Questions that
    /// already have keywords are skipped unless `overwrite` is set.
    pub async fn backfill_keywords(&self, overwrite: bool) -> ExamkitResult<BackfillSummary> {
        let questions = self.bank.list_all()?;
        let span = backfill_span!(questions.len());
        async move {
            let mut summary = BackfillSummary::default();
            for question in questions {
                if !overwrite && !question.keywords.is_empty() {
                    summary.skipped += 1;
                    continue;
                }
                let keywords = self.keywords.extract_for_question(&question).await;
                if keywords.is_empty() {
                    warn!(question = %question.id, "no keywords extracted, leaving question unchanged");
                    summary.skipped += 1;
                    continue;
                }
                self.bank.update_keywords(&question.id, keywords.terms())?;
                summary.updated += 1;
            }
            info!(updated = summary.updated, skipped = summary.skipped, "keyword backfill finished");
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}

fn push_unique(chosen: &mut Vec<Question>, question: Question) {
    if !chosen.iter().any(|q| q.id == question.id) {
        chosen.push(question);
    }
}
