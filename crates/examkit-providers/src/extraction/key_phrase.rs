//! Remote key-phrase service client.
//!
//! `POST {base}/key-phrases` with `{"text", "language"}`, answered by
//! `{"candidates": [{"term", "confidence"}]}`.

use examkit_core::constants::CAPABILITY_EXTRACTOR;
use examkit_core::errors::CapabilityError;
use examkit_core::models::{KeywordCandidate, KeywordCandidateSet};
use examkit_core::traits::IKeywordExtractor;
use serde::{Deserialize, Serialize};

use crate::http;

#[derive(Serialize)]
struct KeyPhraseRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct KeyPhraseResponse {
    candidates: Vec<KeyPhrase>,
}

#[derive(Deserialize)]
struct KeyPhrase {
    term: String,
    #[serde(default)]
    confidence: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct HttpKeyPhraseExtractor {
    http: reqwest::Client,
    url: String,
    language: String,
    api_key: Option<String>,
}

impl HttpKeyPhraseExtractor {
    pub fn new(base_url: &str, language: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}/key-phrases", base_url.trim_end_matches('/')),
            language: language.into(),
            api_key,
        }
    }
}

impl IKeywordExtractor for HttpKeyPhraseExtractor {
    async fn extract_candidates(&self, text: &str) -> Result<KeywordCandidateSet, CapabilityError> {
        let mut request = self.http.post(&self.url).json(&KeyPhraseRequest {
            text,
            language: &self.language,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let raw = http::send(CAPABILITY_EXTRACTOR, request).await?;
        let response: KeyPhraseResponse = serde_json::from_str(&raw).map_err(|e| {
            CapabilityError::malformed(CAPABILITY_EXTRACTOR, format!("JSON parse error: {e}"))
        })?;

        Ok(response
            .candidates
            .into_iter()
            .filter(|p| !p.term.trim().is_empty())
            .map(|p| KeywordCandidate::new(p.term.trim(), p.confidence.unwrap_or(0.5)))
            .collect())
    }

    fn name(&self) -> &str {
        "key-phrase-service"
    }
}
