//! Coarse keyword extraction providers.

mod any;
mod key_phrase;
mod local;
pub mod stopwords;

pub use any::AnyExtractor;
pub use key_phrase::HttpKeyPhraseExtractor;
pub use local::LocalKeywordExtractor;
