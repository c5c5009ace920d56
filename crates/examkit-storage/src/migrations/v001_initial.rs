//! V001: question bank and wrong-answer log.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id TEXT PRIMARY KEY,
    category TEXT NOT NULL,
    seq INTEGER NOT NULL,
    text TEXT NOT NULL,
    answer TEXT NOT NULL,
    example TEXT,
    difficulty INTEGER NOT NULL DEFAULT 3,
    keywords TEXT NOT NULL DEFAULT '[]'
) STRICT;

CREATE INDEX IF NOT EXISTS idx_questions_category
    ON questions(category, seq);

-- Append-only. keywords holds the refined set as JSON.
CREATE TABLE IF NOT EXISTS wrong_answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    question_id TEXT NOT NULL,
    answer_text TEXT NOT NULL,
    submitted_at TEXT NOT NULL,
    keywords TEXT NOT NULL,
    created_at TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_wrong_answers_user
    ON wrong_answers(user_id, question_id);
"#;
