//! Deterministic lexical similarity used when the scorer is unreachable.

use std::collections::HashSet;

use examkit_core::text::{normalize, tokenize};

/// `2 * LCS / (|a| + |b|)` over characters. 1.0 for two empty strings.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in &a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    2.0 * prev[b.len()] as f64 / total as f64
}

/// Share of distinct reference tokens present in the candidate.
pub fn token_recall(candidate: &str, reference: &str) -> f64 {
    let reference: HashSet<String> = tokenize(reference).into_iter().collect();
    if reference.is_empty() {
        return 0.0;
    }
    let candidate: HashSet<String> = tokenize(candidate).into_iter().collect();
    reference.intersection(&candidate).count() as f64 / reference.len() as f64
}

/// Weighted blend of sequence ratio and token recall over normalized text,
/// clamped to [0, 1].
pub fn lexical_score(
    candidate: &str,
    reference: &str,
    sequence_weight: f64,
    recall_weight: f64,
) -> f64 {
    let ratio = sequence_ratio(&normalize(candidate), &normalize(reference));
    let recall = token_recall(candidate, reference);
    (sequence_weight * ratio + recall_weight * recall).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_scores_one() {
        let score = lexical_score("상호배제 점유대기", "상호배제 점유대기", 0.4, 0.6);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_text_scores_zero() {
        assert_eq!(lexical_score("abc", "xyz", 0.4, 0.6), 0.0);
    }

    #[test]
    fn sequence_ratio_matches_known_value() {
        // LCS("abcd", "bcde") = 3 → 6 / 8
        assert_eq!(sequence_ratio("abcd", "bcde"), 0.75);
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("a", ""), 0.0);
    }

    #[test]
    fn recall_counts_distinct_reference_tokens() {
        assert_eq!(token_recall("mutual exclusion", "mutual exclusion hold wait"), 0.5);
        assert_eq!(token_recall("anything", ""), 0.0);
    }
}
