//! # examkit-resilience
//!
//! Wraps every external capability call with a timeout, bounded retries
//! with exponential backoff, and a circuit breaker. Callers get either a
//! value or a [`CapabilityError`](examkit_core::errors::CapabilityError)
//! and run their own fallback; nothing here hangs past the timeout.

pub mod circuit_breaker;
pub mod policy;
pub mod retry;

pub use circuit_breaker::{CircuitBreaker, CircuitState};
pub use policy::{Resilience, RetryPolicy};
pub use retry::call_with_policy;
