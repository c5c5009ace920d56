//! # examkit-providers
//!
//! Concrete implementations of the capability traits in
//! `examkit_core::traits`:
//!
//! 1. Chat-completions scorer and refiner (remote, JSON mode)
//! 2. Key-phrase service extractor (remote)
//! 3. Local frequency extractor (always available, lowest quality)

pub mod chat;
pub mod extraction;
pub mod factory;
mod http;

pub use chat::{ChatClient, LlmKeywordRefiner, LlmSimilarityScorer};
pub use extraction::{AnyExtractor, HttpKeyPhraseExtractor, LocalKeywordExtractor};
pub use factory::{create_extractor, create_refiner, create_scorer};
