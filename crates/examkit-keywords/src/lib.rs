//! # examkit-keywords
//!
//! Stage 1 asks a general extractor for candidates (cached by text hash,
//! local frequency fallback). Stage 2 asks a language model to keep only
//! domain terms, then validates every returned term against its sources.
//! When stage 2 fails, the top stage-1 candidates are used instead and the
//! set is tagged degraded.

pub mod degrade;
pub mod instruction;
pub mod pipeline;
pub mod validation;

pub use pipeline::{KeywordExtractionPipeline, StageBreakers};
pub use validation::{is_traceable, StopList};
