//! Span definitions per operation: submission, exam, backfill.

/// Create a submission span.
#[macro_export]
macro_rules! submission_span {
    ($user:expr, $question:expr) => {
        tracing::info_span!("examkit.submission", user = %$user, question = %$question)
    };
}

/// Create an exam grading span.
#[macro_export]
macro_rules! exam_span {
    ($user:expr, $answers:expr) => {
        tracing::info_span!("examkit.exam", user = %$user, answers = $answers)
    };
}

/// Create a keyword backfill span.
#[macro_export]
macro_rules! backfill_span {
    ($questions:expr) => {
        tracing::info_span!("examkit.backfill", questions = $questions)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUBMISSION: &str = "examkit.submission";
    pub const EXAM: &str = "examkit.exam";
    pub const BACKFILL: &str = "examkit.backfill";
}
