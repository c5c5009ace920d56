//! Retry loop with per-attempt timeout and exponential backoff.

use std::future::Future;

use examkit_core::errors::CapabilityError;
use tracing::{debug, warn};

use crate::circuit_breaker::CircuitBreaker;
use crate::policy::RetryPolicy;

/// Call `op` until it succeeds, fails non-retryably, exhausts retries,
/// or the breaker opens.
///
/// Timeouts, rate limits, and unavailability are retried; malformed
/// responses and rejections return at once. A rate limit's
/// `retry_after_ms` stretches the next backoff, still capped at
/// `max_backoff`.
pub async fn call_with_policy<T, F, Fut>(
    policy: &RetryPolicy,
    breaker: &CircuitBreaker,
    capability: &str,
    mut op: F,
) -> Result<T, CapabilityError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CapabilityError>>,
{
    let mut backoff = policy.initial_backoff;
    let mut last_err: Option<CapabilityError> = None;

    for attempt in 0..=policy.max_retries {
        if !breaker.allow_request() {
            debug!(capability, attempt, "circuit open, skipping call");
            return Err(CapabilityError::CircuitOpen {
                capability: capability.to_string(),
            });
        }

        if attempt > 0 {
            let mut delay = backoff;
            if let Some(CapabilityError::RateLimited {
                retry_after_ms: Some(ms),
                ..
            }) = &last_err
            {
                delay = delay.max(std::time::Duration::from_millis(*ms));
            }
            tokio::time::sleep(delay.min(policy.max_backoff)).await;
            backoff = (backoff * 2).min(policy.max_backoff);
            debug!(capability, attempt, "retrying capability call");
        }

        let outcome = match tokio::time::timeout(policy.timeout, op()).await {
            Ok(result) => result,
            Err(_) => Err(CapabilityError::Timeout {
                capability: capability.to_string(),
                after_ms: policy.timeout.as_millis() as u64,
            }),
        };

        match outcome {
            Ok(value) => {
                breaker.record_success();
                return Ok(value);
            }
            Err(e) => {
                breaker.record_failure();
                warn!(capability, attempt, error = %e, "capability call failed");
                if !e.is_retryable() {
                    return Err(e);
                }
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        CapabilityError::unavailable(capability, "all retries exhausted")
    }))
}
