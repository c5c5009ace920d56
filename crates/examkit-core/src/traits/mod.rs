mod extractor;
mod question_bank;
mod refiner;
mod scorer;
mod wrong_answer_store;

pub use extractor::IKeywordExtractor;
pub use question_bank::{IQuestionBank, IQuestionEditor};
pub use refiner::{IKeywordRefiner, RefinementRequest};
pub use scorer::{ISimilarityScorer, ScoringRequest, ScoringResponse};
pub use wrong_answer_store::IWrongAnswerStore;
