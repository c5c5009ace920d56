use serde::{Deserialize, Serialize};

use super::UserAnswer;

/// Outcome of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
    Uncertain,
}

impl Verdict {
    /// `score >= threshold` is correct, `score < threshold - margin` is
    /// incorrect, anything between is uncertain.
    pub fn from_score(score: f64, threshold: f64, margin: f64) -> Self {
        if score >= threshold {
            Self::Correct
        } else if score < threshold - margin {
            Self::Incorrect
        } else {
            Self::Uncertain
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// How a score was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradingMethod {
    /// External similarity scorer.
    Llm,
    /// Deterministic lexical overlap, used when the scorer is unreachable.
    FallbackLexical,
    /// Deterministic exact/option/enumeration/acronym checks.
    Rule,
}

impl GradingMethod {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::FallbackLexical)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub answer: UserAnswer,
    /// Similarity in [0, 1].
    pub score: f64,
    pub verdict: Verdict,
    pub method: GradingMethod,
    #[serde(default)]
    pub rationale: Option<String>,
}

impl GradingResult {
    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }
}
