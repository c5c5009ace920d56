//! # examkit-recommend
//!
//! Ranks bank questions by keyword overlap with a wrong answer's refined
//! keyword set, or with a user's aggregated wrong-answer history.

pub mod engine;
pub mod profile;
pub mod ranking;

pub use engine::RecommendationEngine;
pub use profile::KeywordProfile;
pub use ranking::ScoredQuestion;
