use std::collections::BTreeMap;
use std::sync::{Mutex, RwLock};

use examkit_core::errors::{ExamkitResult, ValidationError};
use examkit_core::models::{Category, Question, QuestionId, WrongAnswerRecord};
use examkit_core::traits::{IQuestionBank, IQuestionEditor, IWrongAnswerStore};

/// Question bank over a sorted map.
#[derive(Default)]
pub struct InMemoryQuestionBank {
    questions: RwLock<BTreeMap<QuestionId, Question>>,
}

impl InMemoryQuestionBank {
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: RwLock::new(questions.into_iter().map(|q| (q.id.clone(), q)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IQuestionBank for InMemoryQuestionBank {
    fn get_question(&self, id: &QuestionId) -> ExamkitResult<Option<Question>> {
        Ok(self.questions.read().unwrap().get(id).cloned())
    }

    fn list_by_category(&self, category: Category) -> ExamkitResult<Vec<Question>> {
        Ok(self
            .questions
            .read()
            .unwrap()
            .values()
            .filter(|q| q.category() == category)
            .cloned()
            .collect())
    }

    fn list_all(&self) -> ExamkitResult<Vec<Question>> {
        Ok(self.questions.read().unwrap().values().cloned().collect())
    }
}

impl IQuestionEditor for InMemoryQuestionBank {
    fn upsert_question(&self, question: &Question) -> ExamkitResult<()> {
        self.questions
            .write()
            .unwrap()
            .insert(question.id.clone(), question.clone());
        Ok(())
    }

    fn update_keywords(&self, id: &QuestionId, keywords: &[String]) -> ExamkitResult<()> {
        let mut questions = self.questions.write().unwrap();
        let question = questions
            .get_mut(id)
            .ok_or_else(|| ValidationError::MissingQuestion { id: id.to_string() })?;
        question.set_keywords(keywords);
        Ok(())
    }
}

/// Append-only wrong-answer log.
#[derive(Default)]
pub struct InMemoryWrongAnswerStore {
    records: Mutex<Vec<WrongAnswerRecord>>,
}

impl InMemoryWrongAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IWrongAnswerStore for InMemoryWrongAnswerStore {
    fn record_wrong_answer(&self, record: &WrongAnswerRecord) -> ExamkitResult<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn list_wrong_answers(&self, user_id: &str) -> ExamkitResult<Vec<WrongAnswerRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn attempt_count(&self, user_id: &str, question_id: &QuestionId) -> ExamkitResult<u32> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && &r.question_id == question_id)
            .count() as u32)
    }
}
