pub mod questions;
pub mod wrong_answers;
