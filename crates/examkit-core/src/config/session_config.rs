use serde::{Deserialize, Serialize};

use super::defaults;

/// Exam scoring and personalized test settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub points_per_correct: u32,
    pub pass_mark: u32,
    /// Share of a personalized test drawn from previously missed questions.
    pub wrong_ratio: f64,
    pub min_test_questions: usize,
    pub max_test_questions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            points_per_correct: defaults::DEFAULT_POINTS_PER_CORRECT,
            pass_mark: defaults::DEFAULT_PASS_MARK,
            wrong_ratio: defaults::DEFAULT_WRONG_RATIO,
            min_test_questions: defaults::DEFAULT_MIN_TEST_QUESTIONS,
            max_test_questions: defaults::DEFAULT_MAX_TEST_QUESTIONS,
        }
    }
}
