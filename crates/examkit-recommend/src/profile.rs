//! Weighted keyword profile aggregated from wrong-answer history.

use std::collections::HashMap;

use examkit_core::models::WrongAnswerRecord;
use examkit_core::text::normalize_term;

/// Term weights: frequency across records divided by the total count.
#[derive(Debug, Clone, Default)]
pub struct KeywordProfile {
    weights: HashMap<String, f64>,
}

impl KeywordProfile {
    pub fn from_records(records: &[WrongAnswerRecord]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for record in records {
            for term in record.keywords.terms() {
                let term = normalize_term(term);
                if !term.is_empty() {
                    *counts.entry(term).or_insert(0) += 1;
                }
            }
        }

        let total: u32 = counts.values().sum();
        if total == 0 {
            return Self::default();
        }
        let weights = counts
            .into_iter()
            .map(|(term, count)| (term, f64::from(count) / f64::from(total)))
            .collect();
        Self { weights }
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(&normalize_term(term)).copied().unwrap_or(0.0)
    }

    /// Sum of weights of the distinct profile terms among `keywords`.
    pub fn score<S: AsRef<str>>(&self, keywords: &[S]) -> f64 {
        let mut seen: Vec<String> = Vec::new();
        let mut total = 0.0;
        for kw in keywords {
            let term = normalize_term(kw.as_ref());
            if seen.contains(&term) {
                continue;
            }
            total += self.weights.get(&term).copied().unwrap_or(0.0);
            seen.push(term);
        }
        total
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
