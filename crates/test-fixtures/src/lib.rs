//! Shared fakes and sample data for examkit tests.
//!
//! Scripted capability fakes, in-memory bank/store implementations,
//! and a small Korean/English question bank.

pub mod bank;
pub mod fakes;
pub mod questions;

pub use bank::{InMemoryQuestionBank, InMemoryWrongAnswerStore};
pub use fakes::{FakeExtractor, FakeRefiner, FakeScorer};
pub use questions::{deadlock_question, sample_bank, sample_questions};
