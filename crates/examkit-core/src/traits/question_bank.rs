use crate::errors::ExamkitResult;
use crate::models::{Category, Question, QuestionId};

/// Read access to the question bank.
pub trait IQuestionBank: Send + Sync {
    fn get_question(&self, id: &QuestionId) -> ExamkitResult<Option<Question>>;

    fn list_by_category(&self, category: Category) -> ExamkitResult<Vec<Question>>;

    fn list_all(&self) -> ExamkitResult<Vec<Question>>;
}

/// Admin edits to the bank.
pub trait IQuestionEditor: IQuestionBank {
    /// Insert or replace a question.
    fn upsert_question(&self, question: &Question) -> ExamkitResult<()>;

    /// Replace a question's keyword set.
    fn update_keywords(&self, id: &QuestionId, keywords: &[String]) -> ExamkitResult<()>;
}
