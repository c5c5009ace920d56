use serde::{Deserialize, Serialize};

use super::QuestionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub question_id: QuestionId,
    /// Keyword overlap score in (0, 1].
    pub score: f64,
}

/// Ranked recommendations. Recomputed per request; no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationList {
    entries: Vec<Recommendation>,
}

impl RecommendationList {
    pub fn new(entries: Vec<Recommendation>) -> Self {
        Self { entries }
    }

    pub fn ids(&self) -> Vec<&QuestionId> {
        self.entries.iter().map(|e| &e.question_id).collect()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.entries.iter().any(|e| &e.question_id == id)
    }

    pub fn entries(&self) -> &[Recommendation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
