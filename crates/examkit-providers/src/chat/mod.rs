//! OpenAI-compatible chat completions capability clients.

mod client;
mod prompts;
mod refiner;
mod scorer;

pub use client::ChatClient;
pub use refiner::LlmKeywordRefiner;
pub use scorer::LlmSimilarityScorer;
