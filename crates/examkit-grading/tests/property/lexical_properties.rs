//! Property tests for the lexical fallback score.

use examkit_grading::{lexical_score, sequence_ratio};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lexical_score_in_unit_range(a in "[a-z가-힣 ]{0,40}", b in "[a-z가-힣 ]{0,40}") {
        let score = lexical_score(&a, &b, 0.4, 0.6);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn lexical_score_deterministic(a in "[a-z가-힣 ]{0,40}", b in "[a-z가-힣 ]{0,40}") {
        prop_assert_eq!(lexical_score(&a, &b, 0.4, 0.6), lexical_score(&a, &b, 0.4, 0.6));
    }

    #[test]
    fn sequence_ratio_symmetric(a in "[a-z]{0,30}", b in "[a-z]{0,30}") {
        prop_assert_eq!(sequence_ratio(&a, &b), sequence_ratio(&b, &a));
    }

    #[test]
    fn identical_nonblank_text_scores_one(a in "[a-z가-힣]{1,20}( [a-z가-힣]{1,20}){0,4}") {
        prop_assert!((lexical_score(&a, &a, 0.4, 0.6) - 1.0).abs() < 1e-9);
    }
}
