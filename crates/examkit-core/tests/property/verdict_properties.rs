use examkit_core::models::{Provenance, RefinedKeywordSet, Verdict};
use examkit_core::text::{normalize, normalize_term};
use proptest::prelude::*;

proptest! {
    #[test]
    fn verdict_is_deterministic(score in 0.0f64..=1.0) {
        prop_assert_eq!(
            Verdict::from_score(score, 0.7, 0.1),
            Verdict::from_score(score, 0.7, 0.1)
        );
    }

    #[test]
    fn verdict_is_monotone_in_score(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let rank = |v: Verdict| match v {
            Verdict::Incorrect => 0,
            Verdict::Uncertain => 1,
            Verdict::Correct => 2,
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(Verdict::from_score(lo, 0.7, 0.1)) <= rank(Verdict::from_score(hi, 0.7, 0.1)));
    }

    #[test]
    fn at_or_above_threshold_is_correct(score in 0.7f64..=1.0) {
        prop_assert_eq!(Verdict::from_score(score, 0.7, 0.1), Verdict::Correct);
    }

    #[test]
    fn normalize_is_idempotent(s in "[a-zA-Z0-9가-힣 .,!?()-]{0,120}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn refined_set_respects_cap(terms in prop::collection::vec("[a-z가-힣]{1,8}", 0..20), cap in 1usize..8) {
        let set = RefinedKeywordSet::from_terms(&terms, Provenance::Refined, cap);
        prop_assert!(set.len() <= cap);
        let mut seen = std::collections::HashSet::new();
        for t in set.terms() {
            prop_assert!(seen.insert(t.clone()), "duplicate term {}", t);
            prop_assert_eq!(normalize_term(t), t.clone());
        }
    }
}
