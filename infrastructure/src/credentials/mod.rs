//! Credential resolver adapters
//!
//! Implements the startup credential lookup: a session-scoped secrets file
//! first, then the process environment. Both look up `OPENAI_API_KEY`.

pub mod env;
pub mod secrets_file;

pub use env::EnvCredentialResolver;
pub use secrets_file::SecretsFileResolver;

use confab_application::CredentialChain;

/// Name of the secret looked up by every resolver in the default chain.
pub const CREDENTIAL_KEY: &str = "OPENAI_API_KEY";

/// The default resolution order: secrets file, then environment.
pub fn default_chain() -> CredentialChain {
    CredentialChain::new(vec![
        Box::new(SecretsFileResolver::default_location()),
        Box::new(EnvCredentialResolver::new()),
    ])
}
