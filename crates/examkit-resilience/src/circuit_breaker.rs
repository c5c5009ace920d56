//! Three-state circuit breaker.
//!
//! - Closed: calls pass; consecutive failures are counted.
//! - Open: calls are rejected until the cooldown elapses (forever without one).
//! - HalfOpen: a single probe call is let through.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

struct Inner {
    state: CircuitState,
    consecutive_failures: u32,
    opened_at: Option<Instant>,
    probe_in_flight: bool,
}

pub struct CircuitBreaker {
    inner: Mutex<Inner>,
    failure_threshold: u32,
    cooldown: Option<Duration>,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u32, cooldown: Option<Duration>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: CircuitState::Closed,
                consecutive_failures: 0,
                opened_at: None,
                probe_in_flight: false,
            }),
            failure_threshold: failure_threshold.max(1),
            cooldown,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|p| {
            warn!("circuit breaker mutex poisoned, recovering");
            p.into_inner()
        })
    }

    pub fn allow_request(&self) -> bool {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let cooled = match (self.cooldown, inner.opened_at) {
                    (Some(cooldown), Some(opened)) => opened.elapsed() >= cooldown,
                    _ => false,
                };
                if cooled {
                    info!("cooldown elapsed, circuit half-open");
                    inner.state = CircuitState::HalfOpen;
                    inner.probe_in_flight = true;
                }
                cooled
            }
            CircuitState::HalfOpen => {
                if inner.probe_in_flight {
                    false
                } else {
                    inner.probe_in_flight = true;
                    true
                }
            }
        }
    }

    pub fn record_success(&self) {
        let mut inner = self.lock();
        if inner.state != CircuitState::Closed {
            info!(from = ?inner.state, "call succeeded, circuit closed");
        }
        inner.state = CircuitState::Closed;
        inner.consecutive_failures = 0;
        inner.opened_at = None;
        inner.probe_in_flight = false;
    }

    pub fn record_failure(&self) {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => {
                inner.consecutive_failures += 1;
                if inner.consecutive_failures >= self.failure_threshold {
                    warn!(
                        failures = inner.consecutive_failures,
                        threshold = self.failure_threshold,
                        "circuit opened"
                    );
                    inner.state = CircuitState::Open;
                    inner.opened_at = Some(Instant::now());
                }
            }
            CircuitState::HalfOpen => {
                warn!("half-open probe failed, circuit re-opened");
                inner.state = CircuitState::Open;
                inner.opened_at = Some(Instant::now());
                inner.probe_in_flight = false;
            }
            CircuitState::Open => {}
        }
    }

    pub fn state(&self) -> CircuitState {
        self.lock().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == CircuitState::Open
    }
}
