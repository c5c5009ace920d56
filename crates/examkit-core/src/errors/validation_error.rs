//! Input and output validation errors.

use super::error_code::{self, ExamkitErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is empty")]
    EmptyInput { field: String },

    #[error("term '{term}' is not traceable to its candidates or source text")]
    UntraceableTerm { term: String },

    #[error("question not found: {id}")]
    MissingQuestion { id: String },

    #[error("invalid question id '{id}': {reason}")]
    InvalidQuestionId { id: String, reason: String },

    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },

    #[error("difficulty {value} outside 1..=5")]
    InvalidDifficulty { value: u8 },

    #[error("recommendation limit {value} outside 1..={max}")]
    InvalidLimit { value: usize, max: usize },
}

impl ExamkitErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => error_code::EMPTY_INPUT,
            _ => error_code::VALIDATION_FAILURE,
        }
    }
}
