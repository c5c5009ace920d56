//! # examkit-session
//!
//! Wires grading, keyword extraction, recommendation, and storage into
//! one study flow: submit an answer, grade it, and for a wrong answer
//! extract keywords, record the miss, and recommend related questions.

pub mod session;
pub mod tracing_setup;
pub mod wiring;

pub use session::{BackfillSummary, StudySession, SubmissionOutcome};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
pub use wiring::{build_session, LiveSession};
