//! RecommendationEngine: keyword-overlap ranking over the question bank.

use std::collections::HashSet;

use examkit_core::config::RecommendationConfig;
use examkit_core::errors::{ExamkitResult, ValidationError};
use examkit_core::models::{
    Difficulty, QuestionId, RecommendationList, RefinedKeywordSet,
};
use examkit_core::text::normalize_term;
use examkit_core::traits::{IQuestionBank, IWrongAnswerStore};
use tracing::debug;

use crate::profile::KeywordProfile;
use crate::ranking::{self, ScoredQuestion};

pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    fn check_limit(&self, limit: usize) -> ExamkitResult<()> {
        if limit == 0 || limit > self.config.max_limit {
            return Err(ValidationError::InvalidLimit {
                value: limit,
                max: self.config.max_limit,
            }
            .into());
        }
        Ok(())
    }

    /// Questions related to a wrongly answered one.
    ///
    /// Score is the share of `keywords` found in the candidate's keyword
    /// set. The origin question is never included, and at most
    /// `ceil(limit / 2)` entries come from its category.
    pub fn recommend<B: IQuestionBank>(
        &self,
        keywords: &RefinedKeywordSet,
        exclude: &QuestionId,
        bank: &B,
        limit: usize,
    ) -> ExamkitResult<RecommendationList> {
        self.check_limit(limit)?;
        let origin = bank
            .get_question(exclude)?
            .ok_or_else(|| ValidationError::MissingQuestion {
                id: exclude.to_string(),
            })?;

        if keywords.is_empty() {
            debug!(origin = %exclude, "no keywords, nothing to recommend");
            return Ok(RecommendationList::default());
        }

        let wanted: HashSet<&str> = keywords.terms().iter().map(String::as_str).collect();
        let target = f64::from(origin.difficulty.value());
        let scored: Vec<ScoredQuestion> = bank
            .list_all()?
            .into_iter()
            .filter(|q| &q.id != exclude)
            .map(|q| {
                let shared: HashSet<String> = q
                    .keywords
                    .iter()
                    .map(|k| normalize_term(k))
                    .filter(|k| wanted.contains(k.as_str()))
                    .collect();
                ScoredQuestion {
                    score: shared.len() as f64 / wanted.len() as f64,
                    difficulty_distance: q.difficulty.distance_to(target),
                    question: q,
                }
            })
            .collect();

        let cap = self
            .config
            .category_diversity
            .then(|| (origin.category(), ranking::diversity_cap(limit)));
        let entries = ranking::select(scored, limit, self.config.min_score, cap);
        debug!(
            origin = %exclude,
            keywords = keywords.len(),
            recommended = entries.len(),
            "recommendations ranked"
        );
        Ok(RecommendationList::new(entries))
    }

    /// Recommend with the configured default limit.
    pub fn recommend_default<B: IQuestionBank>(
        &self,
        keywords: &RefinedKeywordSet,
        exclude: &QuestionId,
        bank: &B,
    ) -> ExamkitResult<RecommendationList> {
        self.recommend(keywords, exclude, bank, self.config.default_limit)
    }

    /// Recommendations from a user's whole wrong-answer history.
    ///
    /// Every question the user has answered wrongly is excluded. Ties
    /// prefer difficulty close to the mean of the missed questions. No
    /// category cap applies.
    pub fn recommend_from_history<S, B>(
        &self,
        user_id: &str,
        store: &S,
        bank: &B,
        limit: usize,
    ) -> ExamkitResult<RecommendationList>
    where
        S: IWrongAnswerStore,
        B: IQuestionBank,
    {
        self.check_limit(limit)?;
        let records = store.list_wrong_answers(user_id)?;
        let profile = KeywordProfile::from_records(&records);
        if profile.is_empty() {
            debug!(user = user_id, "empty wrong-answer profile");
            return Ok(RecommendationList::default());
        }

        let missed: HashSet<&QuestionId> = records.iter().map(|r| &r.question_id).collect();
        let mut difficulties: Vec<f64> = Vec::new();
        for id in &missed {
            if let Some(q) = bank.get_question(id)? {
                difficulties.push(f64::from(q.difficulty.value()));
            }
        }
        let target = if difficulties.is_empty() {
            f64::from(Difficulty::default().value())
        } else {
            difficulties.iter().sum::<f64>() / difficulties.len() as f64
        };

        let scored: Vec<ScoredQuestion> = bank
            .list_all()?
            .into_iter()
            .filter(|q| !missed.contains(&q.id))
            .map(|q| ScoredQuestion {
                score: profile.score(&q.keywords),
                difficulty_distance: q.difficulty.distance_to(target),
                question: q,
            })
            .collect();

        let entries = ranking::select(scored, limit, self.config.min_score, None);
        debug!(
            user = user_id,
            records = records.len(),
            profile_terms = profile.len(),
            recommended = entries.len(),
            "history recommendations ranked"
        );
        Ok(RecommendationList::new(entries))
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
    }
}
