use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuestionId;

/// A submitted answer. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: QuestionId,
    pub text: String,
    pub submitted_at: DateTime<Utc>,
}

impl UserAnswer {
    pub fn new(question_id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            question_id,
            text: text.into(),
            submitted_at: Utc::now(),
        }
    }

    /// True when the answer is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
