//! Minimal JSON-mode chat completions client.

use examkit_core::errors::CapabilityError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::http;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Shared HTTP client for the chat endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a system + user prompt and parse the reply content as JSON.
    pub async fn complete_json(
        &self,
        capability: &str,
        model: &str,
        temperature: f64,
        system: &str,
        user: &str,
    ) -> Result<Value, CapabilityError> {
        let body = ChatRequest {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let raw = http::send(capability, request).await?;
        let response: ChatResponse = serde_json::from_str(&raw)
            .map_err(|e| CapabilityError::malformed(capability, format!("JSON parse error: {e}")))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CapabilityError::malformed(capability, "no message content"))?;
        debug!(capability, model, chars = content.len(), "chat completion received");

        serde_json::from_str(&content).map_err(|e| {
            CapabilityError::malformed(capability, format!("content is not JSON: {e}"))
        })
    }
}
