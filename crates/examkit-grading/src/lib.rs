//! # examkit-grading
//!
//! Grades a free-text answer against a question's reference answer.
//!
//! Order of evaluation: empty check → deterministic rules → cache →
//! similarity scorer (with an optional second pass in the uncertain
//! band) → lexical fallback when the scorer is unreachable.

pub mod grader;
pub mod lexical;
pub mod rules;

pub use grader::{grading_key, AnswerGrader};
pub use lexical::{lexical_score, sequence_ratio, token_recall};
pub use rules::{check_rules, RuleMatch};
