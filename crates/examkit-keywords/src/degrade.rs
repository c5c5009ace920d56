//! Degraded refinement: top-K coarse candidates.

use examkit_core::models::{KeywordCandidateSet, Provenance, RefinedKeywordSet};

use crate::validation::StopList;

/// Top `k` candidates by confidence, stop-listed terms removed,
/// normalized, deduplicated, capped at `cap`.
pub fn top_k(
    candidates: &KeywordCandidateSet,
    stop_list: &StopList,
    k: usize,
    cap: usize,
) -> RefinedKeywordSet {
    let ranked = candidates
        .by_confidence()
        .into_iter()
        .map(|c| c.term.as_str())
        .filter(|t| !stop_list.contains(t));
    RefinedKeywordSet::from_terms(ranked, Provenance::Degraded, k.min(cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use examkit_core::models::KeywordCandidate;

    #[test]
    fn keeps_highest_confidence_first() {
        let set: KeywordCandidateSet = [
            KeywordCandidate::new("순환대기", 0.8),
            KeywordCandidate::new("의", 0.95),
            KeywordCandidate::new("교착상태", 0.9),
            KeywordCandidate::new("자원", 0.2),
        ]
        .into_iter()
        .collect();
        let degraded = top_k(&set, &StopList::new(["의"]), 2, 5);
        assert_eq!(degraded.terms(), ["교착상태", "순환대기"]);
        assert!(degraded.is_degraded());
    }

    #[test]
    fn dedupes_after_normalization() {
        let set: KeywordCandidateSet = [
            KeywordCandidate::new("TCP", 0.9),
            KeywordCandidate::new("tcp", 0.8),
            KeywordCandidate::new("UDP", 0.7),
        ]
        .into_iter()
        .collect();
        assert_eq!(top_k(&set, &StopList::default(), 5, 5).terms(), ["tcp", "udp"]);
    }
}
