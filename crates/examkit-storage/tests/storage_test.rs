//! SQLite bank and wrong-answer store tests (ST-01 through ST-08).

use examkit_core::models::{
    Category, Provenance, QuestionId, RefinedKeywordSet, UserAnswer, WrongAnswerRecord,
};
use examkit_core::traits::{IQuestionBank, IQuestionEditor, IWrongAnswerStore};
use examkit_storage::migrations::{current_version, LATEST_VERSION};
use examkit_storage::StorageEngine;
use test_fixtures::{deadlock_question, sample_questions};

fn seeded() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.import_questions(&sample_questions()).unwrap();
    engine
}

fn id(s: &str) -> QuestionId {
    QuestionId::parse(s).unwrap()
}

fn record(user: &str, question: &str, terms: &[&str]) -> WrongAnswerRecord {
    WrongAnswerRecord::new(
        user,
        UserAnswer::new(id(question), "틀린 답"),
        RefinedKeywordSet::from_terms(terms.iter().copied(), Provenance::Refined, 5),
    )
}

// ST-01: Questions round-trip through the bank unchanged.
#[test]
fn st_01_question_roundtrip() {
    let engine = seeded();
    let loaded = engine.get_question(&id("os-1")).unwrap().unwrap();
    assert_eq!(loaded, deadlock_question());

    let osi = engine.get_question(&id("network-2")).unwrap().unwrap();
    assert!(osi.example.unwrap().contains("네트워크 계층"));
    assert!(engine.get_question(&id("os-99")).unwrap().is_none());
}

// ST-02: Listing orders by category then numeric sequence.
#[test]
fn st_02_listing_order() {
    let engine = StorageEngine::open_in_memory().unwrap();
    for seq in [10, 2, 1] {
        engine
            .upsert_question(&examkit_core::models::Question::new(
                QuestionId::new(Category::Os, seq),
                "q",
                "a",
            ))
            .unwrap();
    }
    let ids: Vec<String> = engine
        .list_by_category(Category::Os)
        .unwrap()
        .iter()
        .map(|q| q.id.to_string())
        .collect();
    assert_eq!(ids, ["os-1", "os-2", "os-10"]);
}

// ST-03: list_all returns every imported question.
#[test]
fn st_03_list_all() {
    let engine = seeded();
    assert_eq!(engine.list_all().unwrap().len(), sample_questions().len());
    assert_eq!(engine.question_count().unwrap(), sample_questions().len());
    assert_eq!(engine.list_by_category(Category::Db).unwrap().len(), 2);
}

// ST-04: Keyword updates are normalized; unknown ids are rejected.
#[test]
fn st_04_update_keywords() {
    let engine = seeded();
    engine
        .update_keywords(&id("os-3"), &["  Semaphore ".to_string(), "semaphore".to_string(), "P/V".to_string()])
        .unwrap();
    let q = engine.get_question(&id("os-3")).unwrap().unwrap();
    assert_eq!(q.keywords, ["semaphore", "p/v"]);

    assert!(engine.update_keywords(&id("os-99"), &[]).is_err());
}

// ST-05: Upsert replaces an existing question.
#[test]
fn st_05_upsert_replaces() {
    let engine = seeded();
    let mut q = deadlock_question();
    q.answer = "순환 대기 상태".to_string();
    engine.upsert_question(&q).unwrap();
    assert_eq!(engine.get_question(&q.id).unwrap().unwrap().answer, "순환 대기 상태");
    assert_eq!(engine.question_count().unwrap(), sample_questions().len());
}

// ST-06: Wrong answers come back oldest first, per user.
#[test]
fn st_06_wrong_answer_log() {
    let engine = seeded();
    let first = record("u1", "os-1", &["교착상태", "순환대기"]);
    engine.record_wrong_answer(&first).unwrap();
    engine.record_wrong_answer(&record("u2", "db-1", &["원자성"])).unwrap();
    engine.record_wrong_answer(&record("u1", "os-2", &["상호배제"])).unwrap();

    let records = engine.list_wrong_answers("u1").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], first);
    assert_eq!(records[1].question_id, id("os-2"));
    assert!(engine.list_wrong_answers("nobody").unwrap().is_empty());
}

// ST-07: Attempt counts are per user and question.
#[test]
fn st_07_attempt_count() {
    let engine = seeded();
    for _ in 0..3 {
        engine.record_wrong_answer(&record("u1", "os-1", &["교착상태"])).unwrap();
    }
    engine.record_wrong_answer(&record("u2", "os-1", &["교착상태"])).unwrap();
    assert_eq!(engine.attempt_count("u1", &id("os-1")).unwrap(), 3);
    assert_eq!(engine.attempt_count("u2", &id("os-1")).unwrap(), 1);
    assert_eq!(engine.attempt_count("u1", &id("os-2")).unwrap(), 0);
}

// ST-08: A file database persists across reopen and migrations are idempotent.
#[test]
fn st_08_file_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("examkit.db");
    {
        let engine = StorageEngine::open(&path, 1000).unwrap();
        engine.import_questions(&sample_questions()).unwrap();
        engine.record_wrong_answer(&record("u1", "os-4", &["은행원 알고리즘"])).unwrap();
    }
    let engine = StorageEngine::open(&path, 1000).unwrap();
    assert_eq!(engine.question_count().unwrap(), sample_questions().len());
    assert_eq!(engine.list_wrong_answers("u1").unwrap().len(), 1);

    let version = engine
        .database()
        .with_conn(current_version)
        .unwrap();
    assert_eq!(version, LATEST_VERSION);
}
