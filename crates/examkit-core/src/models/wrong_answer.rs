use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{QuestionId, RefinedKeywordSet, UserAnswer};

/// Persisted when an answer is graded incorrect. Never auto-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongAnswerRecord {
    pub user_id: String,
    pub question_id: QuestionId,
    pub answer: UserAnswer,
    pub keywords: RefinedKeywordSet,
    pub created_at: DateTime<Utc>,
}

impl WrongAnswerRecord {
    pub fn new(user_id: impl Into<String>, answer: UserAnswer, keywords: RefinedKeywordSet) -> Self {
        Self {
            user_id: user_id.into(),
            question_id: answer.question_id.clone(),
            answer,
            keywords,
            created_at: Utc::now(),
        }
    }
}
