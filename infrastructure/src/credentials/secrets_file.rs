//! Secrets-file credential resolver

use super::CREDENTIAL_KEY;
use confab_application::CredentialResolver;
use confab_domain::Credential;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Flat TOML secrets file (`key = "value"` pairs).
#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(flatten)]
    entries: std::collections::HashMap<String, toml::Value>,
}

/// Reads the API key from a session-scoped secrets file.
///
/// An absent, unreadable, or malformed file is treated as "not found" so
/// resolution falls through to the next source in the chain.
pub struct SecretsFileResolver {
    path: Option<PathBuf>,
    key: String,
}

impl SecretsFileResolver {
    /// Default location: `~/.config/confab/secrets.toml`.
    pub fn default_location() -> Self {
        let path = dirs::config_dir().map(|d| d.join("confab").join("secrets.toml"));
        Self {
            path,
            key: CREDENTIAL_KEY.to_string(),
        }
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            key: CREDENTIAL_KEY.to_string(),
        }
    }

    fn lookup(&self) -> Option<Credential> {
        let path = self.path.as_ref()?;
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Secrets file {} not readable: {}", path.display(), e);
                return None;
            }
        };
        let secrets: SecretsFile = match toml::from_str(&raw) {
            Ok(secrets) => secrets,
            Err(e) => {
                debug!("Secrets file {} not parseable: {}", path.display(), e);
                return None;
            }
        };
        secrets
            .entries
            .get(&self.key)
            .and_then(|value| value.as_str())
            .filter(|value| !value.trim().is_empty())
            .map(Credential::new)
    }
}

impl CredentialResolver for SecretsFileResolver {
    fn name(&self) -> &str {
        "secrets file"
    }

    fn resolve(&self) -> Option<Credential> {
        self.lookup()
    }
}
