//! Completion gateway adapter for OpenAI-compatible endpoints
//!
//! One POST to `{base_url}/chat/completions` per call, bearer auth, no
//! retry and no streaming. Failures are classified by HTTP status code;
//! transport errors without a status fall back to textual classification.

use crate::openai::wire::{ApiErrorBody, ChatRequest, ChatResponse};
use async_trait::async_trait;
use confab_application::{CompletionError, CompletionGateway, ErrorKind};
use confab_domain::{Credential, Model, Turn};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Adapter for the remote chat-completion endpoint.
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl OpenAiGateway {
    pub fn new(credential: Credential) -> Self {
        Self::with_base_url(credential, DEFAULT_BASE_URL)
    }

    /// Use a non-default endpoint (self-hosted gateways, test stubs).
    pub fn with_base_url(credential: Credential, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Pull `error.message` out of an error body, falling back to the raw
    /// text when the body is not the expected JSON shape.
    fn error_message(status: u16, body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => format!("HTTP {}: {}", status, body.trim()),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, model: &Model, turns: &[Turn]) -> Result<String, CompletionError> {
        let request = ChatRequest::new(model, turns);
        debug!(model = %model, turns = turns.len(), "POST {}", self.url());

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::from_description(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::from_description(e.to_string()))?;

        if !(200..300).contains(&status) {
            let message = Self::error_message(status, &body);
            warn!(status, "Completion request failed: {}", message);
            return Err(CompletionError::from_status(status, message));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            CompletionError::new(
                ErrorKind::Transient,
                format!("Failed to parse completion response: {}", e),
            )
        })?;

        parsed
            .reply_text()
            .map(|text| text.to_string())
            .ok_or_else(|| {
                CompletionError::new(
                    ErrorKind::Transient,
                    "Completion response contained no message content",
                )
            })
    }
}
