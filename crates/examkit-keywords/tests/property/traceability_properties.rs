use examkit_core::models::{KeywordCandidate, KeywordCandidateSet};
use examkit_core::text::normalize_term;
use examkit_keywords::degrade::top_k;
use examkit_keywords::{is_traceable, StopList};
use proptest::prelude::*;

proptest! {
    #[test]
    fn candidates_are_always_traceable(terms in prop::collection::vec("[a-z가-힣]{2,10}", 1..10)) {
        for term in &terms {
            prop_assert!(is_traceable(term, &terms, ""));
        }
    }

    #[test]
    fn source_words_are_always_traceable(words in prop::collection::vec("[a-z가-힣]{2,10}", 1..10)) {
        let source = words.join(" ");
        for word in &words {
            prop_assert!(is_traceable(word, &[], &source));
        }
    }

    #[test]
    fn degraded_terms_come_from_candidates(
        pairs in prop::collection::vec(("[a-z가-힣]{1,8}", 0.0f64..=1.0), 0..15),
        k in 1usize..8,
    ) {
        let set: KeywordCandidateSet = pairs
            .iter()
            .map(|(t, c)| KeywordCandidate::new(t.clone(), *c))
            .collect();
        let degraded = top_k(&set, &StopList::default(), k, 5);
        prop_assert!(degraded.len() <= k.min(5));
        let normalized: Vec<String> = set.terms().map(normalize_term).collect();
        for term in degraded.terms() {
            prop_assert!(normalized.contains(term));
        }
    }
}
