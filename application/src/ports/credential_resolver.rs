//! Credential resolver port
//!
//! The API key is resolved once at session startup from an ordered list of
//! sources and is read-only thereafter. Concrete resolvers (secrets file,
//! process environment) live in the infrastructure layer.

use confab_domain::Credential;
use thiserror::Error;
use tracing::debug;

/// Fatal configuration errors raised before any completion request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("No API key found (tried: {tried})")]
    NotFound { tried: String },
}

/// One credential source tried during startup resolution.
pub trait CredentialResolver: Send + Sync {
    /// Source label used in logs and the not-found error.
    fn name(&self) -> &str;

    /// Look up the credential; `None` falls through to the next resolver.
    fn resolve(&self) -> Option<Credential>;
}

/// A credential together with the name of the source that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedCredential {
    pub credential: Credential,
    pub source: String,
}

/// Ordered list of resolver strategies tried in sequence.
pub struct CredentialChain {
    resolvers: Vec<Box<dyn CredentialResolver>>,
}

impl CredentialChain {
    pub fn new(resolvers: Vec<Box<dyn CredentialResolver>>) -> Self {
        Self { resolvers }
    }

    /// Try each resolver in order and return the first hit.
    ///
    /// Failure here halts the session before any request is attempted.
    pub fn resolve(&self) -> Result<ResolvedCredential, CredentialError> {
        for resolver in &self.resolvers {
            if let Some(credential) = resolver.resolve() {
                debug!("API key resolved from {}", resolver.name());
                return Ok(ResolvedCredential {
                    credential,
                    source: resolver.name().to_string(),
                });
            }
            debug!("API key not found in {}", resolver.name());
        }

        let tried = self
            .resolvers
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ");
        Err(CredentialError::NotFound { tried })
    }
}
