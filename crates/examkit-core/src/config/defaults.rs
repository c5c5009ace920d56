// Single source of truth for all default values.

// --- Grading ---
pub const DEFAULT_VERDICT_THRESHOLD: f64 = 0.7;
pub const DEFAULT_UNCERTAIN_MARGIN: f64 = 0.1;
pub const DEFAULT_SECOND_PASS: bool = true;
pub const DEFAULT_RULE_CHECKS: bool = true;
/// Score assigned when an abbreviation is required but missing.
pub const DEFAULT_MISSING_ACRONYM_SCORE: f64 = 0.1;

// --- Lexical fallback ---
pub const DEFAULT_SEQUENCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_RECALL_WEIGHT: f64 = 0.6;

// --- Keywords ---
pub const DEFAULT_MAX_KEYWORDS: usize = 5;
pub const DEFAULT_DEGRADED_TOP_K: usize = 5;
pub const DEFAULT_LOCAL_FALLBACK: bool = true;
pub const DEFAULT_MAX_SOURCE_CHARS: usize = 5_000;
pub const DEFAULT_GENERIC_TERMS: &[&str] = &[
    "의", "위한", "있는", "것", "주요", "역할", "무엇", "방법", "경우", "관련", "정의", "특징",
];

// --- Recommendation ---
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;
pub const DEFAULT_MIN_OVERLAP_SCORE: f64 = 0.0;
pub const DEFAULT_CATEGORY_DIVERSITY: bool = true;

// --- Cache ---
pub const DEFAULT_L2_CACHE_ENABLED: bool = false;
pub const DEFAULT_L2_CACHE_FILENAME: &str = "examkit-cache.db";

// --- Resilience ---
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 200;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 2_000;
pub const DEFAULT_CIRCUIT_FAILURE_THRESHOLD: u32 = 3;

// --- Providers ---
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_SCORING_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_REFINE_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_LANGUAGE: &str = "ko";

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "examkit.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Session ---
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 5;
pub const DEFAULT_PASS_MARK: u32 = 60;
pub const DEFAULT_WRONG_RATIO: f64 = 0.5;
pub const DEFAULT_MIN_TEST_QUESTIONS: usize = 5;
pub const DEFAULT_MAX_TEST_QUESTIONS: usize = 50;
