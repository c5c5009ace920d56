use crate::errors::ExamkitResult;
use crate::models::{QuestionId, WrongAnswerRecord};

/// Persistence for incorrect answers.
pub trait IWrongAnswerStore: Send + Sync {
    fn record_wrong_answer(&self, record: &WrongAnswerRecord) -> ExamkitResult<()>;

    /// All records for a user, oldest first.
    fn list_wrong_answers(&self, user_id: &str) -> ExamkitResult<Vec<WrongAnswerRecord>>;

    /// How many times the user has answered this question wrong.
    fn attempt_count(&self, user_id: &str, question_id: &QuestionId) -> ExamkitResult<u32>;
}
