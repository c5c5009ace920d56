mod answer;
mod degradation_event;
mod exam;
mod grading;
mod keywords;
mod question;
mod recommendation;
mod wrong_answer;

pub use answer::UserAnswer;
pub use degradation_event::DegradationEvent;
pub use exam::ExamReport;
pub use grading::{GradingMethod, GradingResult, Verdict};
pub use keywords::{KeywordCandidate, KeywordCandidateSet, Provenance, RefinedKeywordSet};
pub use question::{Category, Difficulty, Question, QuestionId};
pub use recommendation::{Recommendation, RecommendationList};
pub use wrong_answer::WrongAnswerRecord;
