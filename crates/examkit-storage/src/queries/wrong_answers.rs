//! Append-only wrong-answer log.

use chrono::{DateTime, Utc};
use examkit_core::errors::StorageError;
use examkit_core::models::{QuestionId, RefinedKeywordSet, UserAnswer, WrongAnswerRecord};
use rusqlite::{params, Connection};

use crate::to_storage_err;

fn corrupt(details: impl Into<String>) -> StorageError {
    StorageError::CorruptRow {
        table: "wrong_answers".to_string(),
        details: details.into(),
    }
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| corrupt(format!("timestamp '{value}': {e}")))
}

pub fn insert_record(conn: &Connection, record: &WrongAnswerRecord) -> Result<(), StorageError> {
    let keywords =
        serde_json::to_string(&record.keywords).map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute(
        "INSERT INTO wrong_answers
            (user_id, question_id, answer_text, submitted_at, keywords, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.user_id,
            record.question_id.to_string(),
            record.answer.text,
            record.answer.submitted_at.to_rfc3339(),
            keywords,
            record.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All records for a user, oldest first.
pub fn list_for_user(conn: &Connection, user_id: &str) -> Result<Vec<WrongAnswerRecord>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT user_id, question_id, answer_text, submitted_at, keywords, created_at
             FROM wrong_answers WHERE user_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let (user_id, question_id, text, submitted_at, keywords, created_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let question_id = QuestionId::parse(&question_id).map_err(|e| corrupt(e.to_string()))?;
        let keywords: RefinedKeywordSet =
            serde_json::from_str(&keywords).map_err(|e| corrupt(format!("keywords: {e}")))?;
        out.push(WrongAnswerRecord {
            user_id,
            question_id: question_id.clone(),
            answer: UserAnswer {
                question_id,
                text,
                submitted_at: parse_time(&submitted_at)?,
            },
            keywords,
            created_at: parse_time(&created_at)?,
        });
    }
    Ok(out)
}

pub fn attempt_count(conn: &Connection, user_id: &str, question_id: &QuestionId) -> Result<u32, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM wrong_answers WHERE user_id = ?1 AND question_id = ?2",
        params![user_id, question_id.to_string()],
        |row| row.get::<_, u32>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
