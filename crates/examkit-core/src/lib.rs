//! # examkit-core
//!
//! Foundation crate for the examkit grading pipeline.
//! Defines all types, traits, errors, config, and text utilities.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ExamkitConfig;
pub use errors::{ExamkitError, ExamkitResult};
pub use models::{
    Category, Difficulty, GradingMethod, GradingResult, KeywordCandidate, KeywordCandidateSet,
    Provenance, Question, QuestionId, RefinedKeywordSet, UserAnswer, Verdict, WrongAnswerRecord,
};
