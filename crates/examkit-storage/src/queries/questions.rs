//! Question bank rows.

use examkit_core::errors::StorageError;
use examkit_core::models::{Category, Difficulty, Question, QuestionId};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::to_storage_err;

const COLUMNS: &str = "id, text, answer, example, difficulty, keywords";

struct RawQuestion {
    id: String,
    text: String,
    answer: String,
    example: Option<String>,
    difficulty: i64,
    keywords: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawQuestion> {
    Ok(RawQuestion {
        id: row.get(0)?,
        text: row.get(1)?,
        answer: row.get(2)?,
        example: row.get(3)?,
        difficulty: row.get(4)?,
        keywords: row.get(5)?,
    })
}

fn corrupt(details: impl Into<String>) -> StorageError {
    StorageError::CorruptRow {
        table: "questions".to_string(),
        details: details.into(),
    }
}

fn into_question(raw: RawQuestion) -> Result<Question, StorageError> {
    let id = QuestionId::parse(&raw.id).map_err(|e| corrupt(e.to_string()))?;
    let difficulty = u8::try_from(raw.difficulty)
        .map_err(|_| corrupt(format!("{}: difficulty {}", raw.id, raw.difficulty)))
        .and_then(|d| Difficulty::new(d).map_err(|e| corrupt(format!("{}: {e}", raw.id))))?;
    let keywords: Vec<String> = serde_json::from_str(&raw.keywords)
        .map_err(|e| corrupt(format!("{}: keywords: {e}", raw.id)))?;

    let mut question = Question::new(id, raw.text, raw.answer).with_difficulty(difficulty);
    question.example = raw.example;
    question.set_keywords(keywords);
    Ok(question)
}

fn query_questions(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> Result<Vec<Question>, StorageError> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(args, read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut out = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(into_question(raw)?);
    }
    Ok(out)
}

/// Insert or replace a question.
pub fn upsert_question(conn: &Connection, question: &Question) -> Result<(), StorageError> {
    let keywords =
        serde_json::to_string(&question.keywords).map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute(
        "INSERT INTO questions (id, category, seq, text, answer, example, difficulty, keywords)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(id) DO UPDATE SET
            text = excluded.text,
            answer = excluded.answer,
            example = excluded.example,
            difficulty = excluded.difficulty,
            keywords = excluded.keywords",
        params![
            question.id.to_string(),
            question.category().as_str(),
            question.id.seq(),
            question.text,
            question.answer,
            question.example,
            question.difficulty.value(),
            keywords,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Insert many questions in one transaction. Returns the count written.
pub fn bulk_upsert(conn: &Connection, questions: &[Question]) -> Result<usize, StorageError> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("bulk_upsert begin: {e}")))?;
    for question in questions {
        upsert_question(&tx, question)?;
    }
    tx.commit()
        .map_err(|e| to_storage_err(format!("bulk_upsert commit: {e}")))?;
    Ok(questions.len())
}

pub fn get_question(conn: &Connection, id: &QuestionId) -> Result<Option<Question>, StorageError> {
    let raw = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM questions WHERE id = ?1"),
            params![id.to_string()],
            read_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(into_question).transpose()
}

pub fn list_by_category(conn: &Connection, category: Category) -> Result<Vec<Question>, StorageError> {
    query_questions(
        conn,
        &format!("SELECT {COLUMNS} FROM questions WHERE category = ?1 ORDER BY seq"),
        params![category.as_str()],
    )
}

pub fn list_all(conn: &Connection) -> Result<Vec<Question>, StorageError> {
    query_questions(
        conn,
        &format!("SELECT {COLUMNS} FROM questions ORDER BY category, seq"),
        params![],
    )
}

/// Replace a question's keywords. Returns false when the id is unknown.
pub fn update_keywords(conn: &Connection, id: &QuestionId, keywords: &[String]) -> Result<bool, StorageError> {
    let keywords = serde_json::to_string(keywords).map_err(|e| to_storage_err(e.to_string()))?;
    let changed = conn
        .execute(
            "UPDATE questions SET keywords = ?2 WHERE id = ?1",
            params![id.to_string(), keywords],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

pub fn count(conn: &Connection) -> Result<usize, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .map_err(|e| to_storage_err(e.to_string()))
}
