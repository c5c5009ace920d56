//! StorageEngine: implements the bank, editor, and wrong-answer traits
//! over one SQLite database.

use std::path::Path;

use examkit_core::config::StorageConfig;
use examkit_core::errors::{ExamkitResult, ValidationError};
use examkit_core::models::{Category, Question, QuestionId, WrongAnswerRecord};
use examkit_core::text::normalize_term;
use examkit_core::traits::{IQuestionBank, IQuestionEditor, IWrongAnswerStore};
use tracing::{debug, info};

use crate::connection::Database;
use crate::queries::{questions, wrong_answers};

const IN_MEMORY: &str = ":memory:";

pub struct StorageEngine {
    db: Database,
}

impl StorageEngine {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> ExamkitResult<Self> {
        Ok(Self {
            db: Database::open(path, busy_timeout_ms)?,
        })
    }

    /// Open an in-memory engine (for testing).
    pub fn open_in_memory() -> ExamkitResult<Self> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// `db_path = ":memory:"` opens an in-memory database.
    pub fn from_config(config: &StorageConfig) -> ExamkitResult<Self> {
        if config.db_path == IN_MEMORY {
            Self::open_in_memory()
        } else {
            Self::open(Path::new(&config.db_path), config.busy_timeout_ms)
        }
    }

    /// Load many questions in one transaction.
    pub fn import_questions(&self, items: &[Question]) -> ExamkitResult<usize> {
        let written = self
            .db
            .with_conn(|conn| questions::bulk_upsert(conn, items))?;
        info!(count = written, "questions imported");
        Ok(written)
    }

    pub fn question_count(&self) -> ExamkitResult<usize> {
        Ok(self.db.with_conn(questions::count)?)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl IQuestionBank for StorageEngine {
    fn get_question(&self, id: &QuestionId) -> ExamkitResult<Option<Question>> {
        Ok(self.db.with_conn(|conn| questions::get_question(conn, id))?)
    }

    fn list_by_category(&self, category: Category) -> ExamkitResult<Vec<Question>> {
        Ok(self
            .db
            .with_conn(|conn| questions::list_by_category(conn, category))?)
    }

    fn list_all(&self) -> ExamkitResult<Vec<Question>> {
        Ok(self.db.with_conn(questions::list_all)?)
    }
}

impl IQuestionEditor for StorageEngine {
    fn upsert_question(&self, question: &Question) -> ExamkitResult<()> {
        self.db
            .with_conn(|conn| questions::upsert_question(conn, question))?;
        debug!(question = %question.id, "question saved");
        Ok(())
    }

    fn update_keywords(&self, id: &QuestionId, keywords: &[String]) -> ExamkitResult<()> {
        let normalized = normalize_keywords(keywords);
        let found = self
            .db
            .with_conn(|conn| questions::update_keywords(conn, id, &normalized))?;
        if !found {
            return Err(ValidationError::MissingQuestion { id: id.to_string() }.into());
        }
        debug!(question = %id, keywords = normalized.len(), "keywords updated");
        Ok(())
    }
}

/// Normalize and dedupe in order, as `Question::set_keywords` does.
fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for kw in keywords {
        let term = normalize_term(kw);
        if !term.is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}

impl IWrongAnswerStore for StorageEngine {
    fn record_wrong_answer(&self, record: &WrongAnswerRecord) -> ExamkitResult<()> {
        self.db
            .with_conn(|conn| wrong_answers::insert_record(conn, record))?;
        info!(
            user = %record.user_id,
            question = %record.question_id,
            keywords = record.keywords.len(),
            "wrong answer recorded"
        );
        Ok(())
    }

    fn list_wrong_answers(&self, user_id: &str) -> ExamkitResult<Vec<WrongAnswerRecord>> {
        Ok(self
            .db
            .with_conn(|conn| wrong_answers::list_for_user(conn, user_id))?)
    }

    fn attempt_count(&self, user_id: &str, question_id: &QuestionId) -> ExamkitResult<u32> {
        Ok(self
            .db
            .with_conn(|conn| wrong_answers::attempt_count(conn, user_id, question_id))?)
    }
}
