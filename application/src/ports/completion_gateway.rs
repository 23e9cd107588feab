//! Completion gateway port
//!
//! Defines the interface for the remote chat-completion endpoint, plus the
//! per-request error taxonomy. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use confab_domain::{Model, Turn};
use thiserror::Error;

/// User-facing category of a failed completion request.
///
/// Classification is advisory only: it selects the guidance shown to the
/// user and never changes retry behavior (there is none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rate limit or quota exhaustion (HTTP 429).
    RateLimited,
    /// The API key was rejected (HTTP 401).
    InvalidCredential,
    /// Anything else; the session remains usable.
    Transient,
}

impl ErrorKind {
    /// Classify from a structured HTTP status code.
    ///
    /// Preferred over [`ErrorKind::from_description`]: status codes are
    /// stable across SDK versions and locales, error message text is not.
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => ErrorKind::RateLimited,
            401 => ErrorKind::InvalidCredential,
            _ => ErrorKind::Transient,
        }
    }

    /// Classify from a failure's textual description, for transport-level
    /// failures that carry no HTTP status. First match wins.
    pub fn from_description(description: &str) -> Self {
        if description.contains("429") || description.contains("quota") {
            ErrorKind::RateLimited
        } else if description.contains("401") {
            ErrorKind::InvalidCredential
        } else {
            ErrorKind::Transient
        }
    }

    /// Targeted guidance to display alongside the error message.
    pub fn guidance(&self) -> &'static str {
        match self {
            ErrorKind::RateLimited => {
                "Check your usage dashboard, add billing credit, wait for the \
                 quota to reset, or rotate the API key."
            }
            ErrorKind::InvalidCredential => "Regenerate the API key.",
            ErrorKind::Transient => "Retry later.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::InvalidCredential => "invalid credential",
            ErrorKind::Transient => "transient failure",
        };
        write!(f, "{}", name)
    }
}

/// A classified completion failure.
///
/// Per-request and non-fatal: the session stays usable and the caller may
/// submit another message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct CompletionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CompletionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify from an HTTP status code and its error message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::from_status(status), message)
    }

    /// Classify from a textual description alone (no structured status).
    pub fn from_description(description: impl Into<String>) -> Self {
        let description = description.into();
        Self::new(ErrorKind::from_description(&description), description)
    }

    pub fn guidance(&self) -> &'static str {
        self.kind.guidance()
    }
}

/// Gateway to the remote chat-completion endpoint
///
/// Stateless with respect to conversation history: the caller passes the
/// full turn sequence on every call and appends both the outgoing user Turn
/// and the returned assistant Turn itself. One synchronous round trip per
/// call; no retry, no timeout override, no streaming.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the full turn sequence and return the assistant's reply text.
    async fn complete(&self, model: &Model, turns: &[Turn]) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_429_is_rate_limited() {
        assert_eq!(ErrorKind::from_status(429), ErrorKind::RateLimited);
    }

    #[test]
    fn test_status_401_is_invalid_credential() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::InvalidCredential);
    }

    #[test]
    fn test_other_statuses_are_transient() {
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Transient);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::Transient);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::Transient);
    }

    #[test]
    fn test_description_with_429_and_quota_is_rate_limited() {
        let error = CompletionError::from_description("Error code: 429 - quota exceeded");
        assert_eq!(error.kind, ErrorKind::RateLimited);
    }

    #[test]
    fn test_description_with_quota_alone_is_rate_limited() {
        let error = CompletionError::from_description("monthly quota exhausted");
        assert_eq!(error.kind, ErrorKind::RateLimited);
    }

    #[test]
    fn test_description_with_401_is_invalid_credential() {
        let error = CompletionError::from_description("401 Unauthorized");
        assert_eq!(error.kind, ErrorKind::InvalidCredential);
    }

    #[test]
    fn test_first_match_wins() {
        // Contains both a quota indicator and 401; rate limit is checked first
        let error = CompletionError::from_description("quota check failed with 401");
        assert_eq!(error.kind, ErrorKind::RateLimited);
    }

    #[test]
    fn test_unrecognized_description_is_transient() {
        let error = CompletionError::from_description("connection reset by peer");
        assert_eq!(error.kind, ErrorKind::Transient);
    }

    #[test]
    fn test_guidance_mentions_key_rotation_for_rate_limits() {
        assert!(ErrorKind::RateLimited.guidance().contains("rotate"));
        assert!(ErrorKind::InvalidCredential.guidance().contains("Regenerate"));
    }

    #[test]
    fn test_error_display_includes_kind_and_message() {
        let error = CompletionError::from_status(429, "quota exceeded");
        assert_eq!(error.to_string(), "rate limited: quota exceeded");
    }
}
