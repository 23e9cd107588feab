//! Wire types for the chat-completions endpoint
//!
//! These structs mirror the JSON request and response shapes of the
//! OpenAI-compatible `/chat/completions` API.

use confab_domain::{Model, Role, Turn};
use serde::{Deserialize, Serialize};

/// Outbound request body
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: Model,
    pub messages: Vec<WireMessage>,
}

impl ChatRequest {
    /// Build a request carrying the full turn sequence in order.
    pub fn new(model: &Model, turns: &[Turn]) -> Self {
        Self {
            model: model.clone(),
            messages: turns.iter().map(WireMessage::from).collect(),
        }
    }
}

/// One message of the request payload
#[derive(Debug, Serialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

impl From<&Turn> for WireMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

/// Successful response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// Extract the single reply message's text content, if present.
    pub fn reply_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

/// Error response body (`{"error": {"message": ...}}`)
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
