/// Crate version, embedded at compile time.
pub const EXAMKIT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that controls the tracing filter.
pub const LOG_ENV_VAR: &str = "EXAMKIT_LOG";

/// Prefix for configuration overrides read from the environment.
pub const ENV_PREFIX: &str = "EXAMKIT_";

/// Lowest and highest question difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Capability names used in logs, errors, and degradation events.
pub const CAPABILITY_SCORER: &str = "similarity-scorer";
pub const CAPABILITY_EXTRACTOR: &str = "keyword-extractor";
pub const CAPABILITY_REFINER: &str = "keyword-refiner";

/// Hard cap on recommendation list length accepted from callers.
pub const MAX_RECOMMENDATION_LIMIT: usize = 10;

/// Question/answer text sent to the coarse extractor is truncated to this many chars.
pub const MAX_EXTRACTION_CHARS: usize = 5_000;
