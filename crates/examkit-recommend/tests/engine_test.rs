//! Integration tests for RecommendationEngine (RC-01 through RC-09).

use examkit_core::models::{
    Category, Provenance, Question, QuestionId, RefinedKeywordSet, UserAnswer,
    WrongAnswerRecord,
};
use examkit_core::traits::IWrongAnswerStore;
use examkit_recommend::RecommendationEngine;
use test_fixtures::{sample_bank, InMemoryQuestionBank, InMemoryWrongAnswerStore};

fn id(s: &str) -> QuestionId {
    QuestionId::parse(s).unwrap()
}

fn keywords(terms: &[&str]) -> RefinedKeywordSet {
    RefinedKeywordSet::from_terms(terms.iter().copied(), Provenance::Refined, 5)
}

fn ids(list: &examkit_core::models::RecommendationList) -> Vec<String> {
    list.ids().iter().map(|id| id.to_string()).collect()
}

// RC-01: Overlap share ranks first, difficulty proximity and id break ties.
#[test]
fn rc_01_ranking_and_tie_breaks() {
    let engine = RecommendationEngine::default();
    let list = engine
        .recommend(&keywords(&["교착상태", "순환대기"]), &id("os-1"), &sample_bank(), 4)
        .unwrap();
    assert_eq!(ids(&list), ["os-2", "program-1", "db-2", "os-4"]);
    assert_eq!(list.entries()[0].score, 1.0);
    assert_eq!(list.entries()[2].score, 0.5);
}

// RC-02: The originating question is never recommended.
#[test]
fn rc_02_excludes_origin() {
    let engine = RecommendationEngine::default();
    let list = engine
        .recommend(&keywords(&["교착상태"]), &id("os-2"), &sample_bank(), 10)
        .unwrap();
    assert!(!list.contains(&id("os-2")));
    assert!(list.contains(&id("os-1")));
}

// RC-03: limit=4 takes at most 2 from the origin category, without padding.
#[test]
fn rc_03_category_diversity_cap() {
    let mut questions: Vec<Question> = (1..=6)
        .map(|seq| {
            Question::new(QuestionId::new(Category::Os, seq), "q", "a")
                .with_keywords(["교착상태"])
        })
        .collect();
    questions.push(
        Question::new(QuestionId::new(Category::Db, 1), "q", "a").with_keywords(["교착상태"]),
    );
    let bank = InMemoryQuestionBank::new(questions);

    let engine = RecommendationEngine::default();
    let list = engine
        .recommend(&keywords(&["교착상태"]), &id("os-1"), &bank, 4)
        .unwrap();
    assert_eq!(ids(&list), ["db-1", "os-2", "os-3"]);
}

// RC-04: Diversity can be switched off.
#[test]
fn rc_04_diversity_disabled() {
    let questions: Vec<Question> = (1..=5)
        .map(|seq| {
            Question::new(QuestionId::new(Category::Os, seq), "q", "a")
                .with_keywords(["세마포어"])
        })
        .collect();
    let bank = InMemoryQuestionBank::new(questions);
    let mut config = examkit_core::config::RecommendationConfig::default();
    config.category_diversity = false;

    let list = RecommendationEngine::new(config)
        .recommend(&keywords(&["세마포어"]), &id("os-1"), &bank, 4)
        .unwrap();
    assert_eq!(list.len(), 4);
}

// RC-05: No overlap, no recommendations.
#[test]
fn rc_05_never_pads() {
    let engine = RecommendationEngine::default();
    let list = engine
        .recommend(&keywords(&["양자컴퓨팅"]), &id("os-1"), &sample_bank(), 5)
        .unwrap();
    assert!(list.is_empty());

    let empty = engine
        .recommend(&RefinedKeywordSet::empty(Provenance::Degraded), &id("os-1"), &sample_bank(), 5)
        .unwrap();
    assert!(empty.is_empty());
}

// RC-06: Out-of-range limits and unknown origins are rejected.
#[test]
fn rc_06_invalid_input_rejected() {
    let engine = RecommendationEngine::default();
    let bank = sample_bank();
    let kw = keywords(&["교착상태"]);
    assert!(engine.recommend(&kw, &id("os-1"), &bank, 0).is_err());
    assert!(engine.recommend(&kw, &id("os-1"), &bank, 11).is_err());
    assert!(engine.recommend(&kw, &id("os-99"), &bank, 5).is_err());
}

// RC-07: Default limit comes from config.
#[test]
fn rc_07_default_limit() {
    let engine = RecommendationEngine::default();
    let list = engine
        .recommend_default(&keywords(&["교착상태"]), &id("os-1"), &sample_bank())
        .unwrap();
    assert!(list.len() <= 5);
    assert!(!list.is_empty());
}

fn record(store: &InMemoryWrongAnswerStore, question: &str, terms: &[&str]) {
    let answer = UserAnswer::new(id(question), "오답");
    store
        .record_wrong_answer(&WrongAnswerRecord::new("u1", answer, keywords(terms)))
        .unwrap();
}

// RC-08: History profile weights frequent terms and excludes every missed question.
#[test]
fn rc_08_history_recommendations() {
    let store = InMemoryWrongAnswerStore::new();
    record(&store, "os-1", &["교착상태", "순환대기"]);
    record(&store, "os-2", &["교착상태", "상호배제"]);

    let engine = RecommendationEngine::default();
    let list = engine
        .recommend_from_history("u1", &store, &sample_bank(), 5)
        .unwrap();
    assert_eq!(ids(&list), ["program-1", "db-2", "os-4"]);
    assert!((list.entries()[0].score - 0.75).abs() < 1e-9);
}

// RC-09: Users without history get nothing.
#[test]
fn rc_09_empty_history() {
    let store = InMemoryWrongAnswerStore::new();
    record(&store, "os-1", &["교착상태"]);
    let engine = RecommendationEngine::default();
    let list = engine
        .recommend_from_history("someone-else", &store, &sample_bank(), 5)
        .unwrap();
    assert!(list.is_empty());
}
