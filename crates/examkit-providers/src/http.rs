//! Shared HTTP error mapping.

use examkit_core::errors::CapabilityError;
use reqwest::StatusCode;

/// Map a transport error to a capability error.
pub(crate) fn transport_error(capability: &str, e: &reqwest::Error) -> CapabilityError {
    if e.is_timeout() {
        CapabilityError::Timeout {
            capability: capability.to_string(),
            after_ms: 0,
        }
    } else {
        CapabilityError::unavailable(capability, format!("HTTP error: {e}"))
    }
}

/// Map a non-success status to a capability error.
///
/// 429 is a rate limit, 5xx is unavailability, other 4xx are rejections.
pub(crate) fn status_error(
    capability: &str,
    status: StatusCode,
    retry_after: Option<&str>,
    body: &str,
) -> CapabilityError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        CapabilityError::RateLimited {
            capability: capability.to_string(),
            retry_after_ms: retry_after
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|secs| secs * 1_000),
        }
    } else if status.is_server_error() {
        CapabilityError::unavailable(capability, format!("API returned {status}: {body}"))
    } else {
        CapabilityError::Rejected {
            capability: capability.to_string(),
            reason: format!("API returned {status}: {body}"),
        }
    }
}

/// Send a prepared request and return the body of a 2xx response.
pub(crate) async fn send(
    capability: &str,
    request: reqwest::RequestBuilder,
) -> Result<String, CapabilityError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(capability, &e))?;

    let status = response.status();
    if !status.is_success() {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(capability, status, retry_after.as_deref(), &body));
    }

    response
        .text()
        .await
        .map_err(|e| transport_error(capability, &e))
}
