use serde::{Deserialize, Serialize};

use crate::text::normalize_term;

/// One coarse-extraction candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub term: String,
    /// In [0, 1].
    pub confidence: f64,
}

impl KeywordCandidate {
    pub fn new(term: impl Into<String>, confidence: f64) -> Self {
        Self {
            term: term.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Raw output of coarse extraction. May contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCandidateSet {
    candidates: Vec<KeywordCandidate>,
}

impl KeywordCandidateSet {
    pub fn new(candidates: Vec<KeywordCandidate>) -> Self {
        Self { candidates }
    }

    pub fn push(&mut self, candidate: KeywordCandidate) {
        self.candidates.push(candidate);
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordCandidate> {
        self.candidates.iter()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates by descending confidence; ties keep extraction order.
    pub fn by_confidence(&self) -> Vec<&KeywordCandidate> {
        let mut ranked: Vec<&KeywordCandidate> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

impl FromIterator<KeywordCandidate> for KeywordCandidateSet {
    fn from_iter<T: IntoIterator<Item = KeywordCandidate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Where a refined set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Filtered by the refinement capability and validated.
    Refined,
    /// Top-K coarse candidates, used when refinement failed.
    Degraded,
}

/// Normalized, deduplicated, length-bounded keyword list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinedKeywordSet {
    terms: Vec<String>,
    provenance: Provenance,
}

impl RefinedKeywordSet {
    /// Normalize, drop empties and duplicates, keep at most `cap` terms.
    pub fn from_terms<I, S>(terms: I, provenance: Provenance, cap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            if out.len() >= cap {
                break;
            }
            let term = normalize_term(term.as_ref());
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }
        Self {
            terms: out,
            provenance,
        }
    }

    pub fn empty(provenance: Provenance) -> Self {
        Self {
            terms: Vec::new(),
            provenance,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn contains(&self, term: &str) -> bool {
        let term = normalize_term(term);
        self.terms.iter().any(|t| *t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_degraded(&self) -> bool {
        self.provenance == Provenance::Degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refined_set_dedupes_and_caps() {
        let set = RefinedKeywordSet::from_terms(
            ["Deadlock", "deadlock", " Mutex ", "Semaphore", "Monitor", "Spinlock", "Futex"],
            Provenance::Refined,
            5,
        );
        assert_eq!(set.terms(), ["deadlock", "mutex", "semaphore", "monitor", "spinlock"]);
        assert!(set.contains("MUTEX"));
    }

    #[test]
    fn by_confidence_is_stable_on_ties() {
        let set: KeywordCandidateSet = [
            KeywordCandidate::new("a", 0.5),
            KeywordCandidate::new("b", 0.9),
            KeywordCandidate::new("c", 0.5),
        ]
        .into_iter()
        .collect();
        let ranked: Vec<&str> = set.by_confidence().iter().map(|c| c.term.as_str()).collect();
        assert_eq!(ranked, vec!["b", "a", "c"]);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(KeywordCandidate::new("x", 1.7).confidence, 1.0);
        assert_eq!(KeywordCandidate::new("x", -0.2).confidence, 0.0);
    }
}
