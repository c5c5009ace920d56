//! Integration tests for the result cache over real model values.

use std::sync::Arc;

use examkit_cache::{CacheHitTier, L2SqliteCache, ResultCache};
use examkit_core::errors::CacheError;
use examkit_core::hashing::content_key;
use examkit_core::models::{
    Category, GradingMethod, GradingResult, KeywordCandidate, KeywordCandidateSet, QuestionId,
    UserAnswer, Verdict,
};

fn result(score: f64) -> GradingResult {
    GradingResult {
        answer: UserAnswer {
            question_id: QuestionId::new(Category::Os, 1),
            text: "circular wait".to_string(),
            submitted_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        },
        score,
        verdict: Verdict::from_score(score, 0.7, 0.1),
        method: GradingMethod::Llm,
        rationale: None,
    }
}

#[test]
fn grading_results_are_write_once() {
    let cache = ResultCache::in_memory(None);
    let key = content_key("grade", &["os-1", "deadlock", "circular wait"]);
    cache.put(&key, result(0.9)).unwrap();
    cache.put(&key, result(0.9)).unwrap();
    assert!(matches!(cache.put(&key, result(0.4)), Err(CacheError::KeyCollision { .. })));
    assert_eq!(cache.get(&key).map(|r| r.score), Some(0.9));
}

#[test]
fn candidate_sets_survive_reopen() {
    let dir = std::env::temp_dir().join(format!("examkit-cache-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cache.db");
    let _ = std::fs::remove_file(&path);

    let set: KeywordCandidateSet = [KeywordCandidate::new("교착상태", 0.9)].into_iter().collect();
    {
        let cache = ResultCache::with_l2(None, L2SqliteCache::open(&path).unwrap());
        cache.put("text-hash", set.clone()).unwrap();
    }

    let cache: ResultCache<KeywordCandidateSet> =
        ResultCache::with_l2(None, L2SqliteCache::open(&path).unwrap());
    let (value, tier) = cache.lookup("text-hash");
    assert_eq!(value, Some(set));
    assert_eq!(tier, CacheHitTier::L2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn concurrent_identical_puts_converge() {
    let cache = Arc::new(ResultCache::in_memory(None));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.put("same", result(0.8)))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(cache.get("same").map(|r| r.score), Some(0.8));
}
