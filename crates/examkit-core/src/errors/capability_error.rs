//! Failures of external text-understanding capabilities.

use super::error_code::{self, ExamkitErrorCode};

/// Errors returned by the similarity scorer, keyword extractor, and refiner.
///
/// These are recovered locally by fallbacks and never surface from
/// `grade` or `extract`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CapabilityError {
    #[error("{capability} timed out after {after_ms}ms")]
    Timeout { capability: String, after_ms: u64 },

    #[error("{capability} returned a malformed response: {reason}")]
    MalformedResponse { capability: String, reason: String },

    #[error("{capability} rate limited")]
    RateLimited {
        capability: String,
        retry_after_ms: Option<u64>,
    },

    #[error("{capability} unavailable: {reason}")]
    Unavailable { capability: String, reason: String },

    #[error("{capability} rejected the request: {reason}")]
    Rejected { capability: String, reason: String },

    #[error("circuit open for {capability}")]
    CircuitOpen { capability: String },
}

impl CapabilityError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::RateLimited { .. } | Self::Unavailable { .. }
        )
    }

    /// Name of the capability that failed.
    pub fn capability(&self) -> &str {
        match self {
            Self::Timeout { capability, .. }
            | Self::MalformedResponse { capability, .. }
            | Self::RateLimited { capability, .. }
            | Self::Unavailable { capability, .. }
            | Self::Rejected { capability, .. }
            | Self::CircuitOpen { capability } => capability,
        }
    }

    pub fn malformed(capability: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            capability: capability.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(capability: &str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            capability: capability.to_string(),
            reason: reason.into(),
        }
    }
}

impl ExamkitErrorCode for CapabilityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::EXTERNAL_SERVICE_TIMEOUT,
            Self::MalformedResponse { .. } => error_code::EXTERNAL_SERVICE_MALFORMED_RESPONSE,
            Self::RateLimited { .. } => error_code::EXTERNAL_SERVICE_RATE_LIMITED,
            Self::Unavailable { .. } => error_code::EXTERNAL_SERVICE_UNAVAILABLE,
            Self::Rejected { .. } => error_code::EXTERNAL_SERVICE_REJECTED,
            Self::CircuitOpen { .. } => error_code::CIRCUIT_OPEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_is_not_retryable() {
        let err = CapabilityError::malformed("scorer", "score was 'high'");
        assert!(!err.is_retryable());
        assert_eq!(err.capability(), "scorer");
    }

    #[test]
    fn rate_limit_is_retryable() {
        let err = CapabilityError::RateLimited {
            capability: "refiner".into(),
            retry_after_ms: Some(500),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_RATE_LIMITED");
    }

    #[test]
    fn coded_string_prefixes_code() {
        let err = CapabilityError::CircuitOpen {
            capability: "scorer".into(),
        };
        assert_eq!(err.coded_string(), "[CIRCUIT_OPEN] circuit open for scorer");
    }
}
