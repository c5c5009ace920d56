use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Timeout, retry, and circuit-breaker settings for external calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResilienceConfig {
    pub timeout_ms: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Consecutive failed calls before the circuit opens.
    pub circuit_failure_threshold: u32,
}

impl ResilienceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.max_backoff_ms)
    }
}

impl Default for ResilienceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
            circuit_failure_threshold: defaults::DEFAULT_CIRCUIT_FAILURE_THRESHOLD,
        }
    }
}
