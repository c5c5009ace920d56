//! Property tests: exclusion, uniqueness, diversity, and ordering of
//! recommendation lists over the sample bank.

use std::collections::HashSet;

use examkit_core::models::{Provenance, RefinedKeywordSet};
use examkit_core::traits::IQuestionBank;
use examkit_recommend::RecommendationEngine;
use proptest::prelude::*;
use test_fixtures::sample_bank;

const VOCAB: &[&str] = &[
    "교착상태", "순환대기", "자원", "프로세스", "트랜잭션", "tcp", "dfs", "세마포어", "뮤텍스", "회피",
];

proptest! {
    #[test]
    fn recommendations_respect_invariants(
        picks in proptest::sample::subsequence(VOCAB.to_vec(), 1..=5),
        origin in 0usize..11,
        limit in 1usize..=10,
    ) {
        let bank = sample_bank();
        let all = bank.list_all().unwrap();
        let origin = &all[origin % all.len()];
        let keywords = RefinedKeywordSet::from_terms(picks, Provenance::Refined, 5);

        let list = RecommendationEngine::default()
            .recommend(&keywords, &origin.id, &bank, limit)
            .unwrap();

        prop_assert!(list.len() <= limit);
        prop_assert!(!list.contains(&origin.id));

        let unique: HashSet<_> = list.ids().into_iter().collect();
        prop_assert_eq!(unique.len(), list.len());

        let same_category = list
            .ids()
            .iter()
            .filter(|id| id.category() == origin.category())
            .count();
        prop_assert!(same_category <= limit.div_ceil(2));

        let scores: Vec<f64> = list.entries().iter().map(|r| r.score).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(scores.iter().all(|s| *s > 0.0 && *s <= 1.0));
    }
}
