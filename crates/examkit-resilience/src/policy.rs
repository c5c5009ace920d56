//! Retry policy and the per-request resilience bundle.

use std::future::Future;
use std::time::Duration;

use examkit_core::config::ResilienceConfig;
use examkit_core::errors::CapabilityError;

use crate::circuit_breaker::CircuitBreaker;
use crate::retry::call_with_policy;

/// Timeout and retry settings for one external call.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &ResilienceConfig) -> Self {
        Self {
            timeout: config.timeout(),
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
        }
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let mut backoff = self.initial_backoff;
        for _ in 1..retry {
            backoff = (backoff * 2).min(self.max_backoff);
        }
        backoff.min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ResilienceConfig::default())
    }
}

/// Retry policy plus circuit-breaker settings.
///
/// Breakers are created per request with [`Resilience::breaker`], so one
/// request's failures never short-circuit another's.
#[derive(Debug, Clone)]
pub struct Resilience {
    policy: RetryPolicy,
    failure_threshold: u32,
}

impl Resilience {
    pub fn new(policy: RetryPolicy, failure_threshold: u32) -> Self {
        Self {
            policy,
            failure_threshold: failure_threshold.max(1),
        }
    }

    pub fn from_config(config: &ResilienceConfig) -> Self {
        Self::new(
            RetryPolicy::from_config(config),
            config.circuit_failure_threshold,
        )
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// A fresh breaker for one request. Stays open once tripped.
    pub fn breaker(&self) -> CircuitBreaker {
        CircuitBreaker::new(self.failure_threshold, None)
    }

    /// Run `op` under this policy, guarded by `breaker`.
    pub async fn call<T, F, Fut>(
        &self,
        breaker: &CircuitBreaker,
        capability: &str,
        op: F,
    ) -> Result<T, CapabilityError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, CapabilityError>>,
    {
        call_with_policy(&self.policy, breaker, capability, op).await
    }
}

impl Default for Resilience {
    fn default() -> Self {
        Self::from_config(&ResilienceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            timeout: Duration::from_secs(1),
            max_retries: 5,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_millis(700),
        };
        assert_eq!(policy.backoff_for(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(400));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(700));
        assert_eq!(policy.backoff_for(9), Duration::from_millis(700));
    }

    #[test]
    fn defaults_match_config() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.timeout, Duration::from_secs(5));
        assert_eq!(policy.max_retries, 2);
    }
}
