use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A degradation event when a stage falls back to a lower-quality mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

impl DegradationEvent {
    pub fn now(component: &str, failure: impl Into<String>, fallback_used: &str) -> Self {
        Self {
            component: component.to_string(),
            failure: failure.into(),
            fallback_used: fallback_used.to_string(),
            timestamp: Utc::now(),
        }
    }
}
