//! Process-environment credential resolver

use super::CREDENTIAL_KEY;
use confab_application::CredentialResolver;
use confab_domain::Credential;

/// Reads the API key from a process environment variable.
pub struct EnvCredentialResolver {
    var: String,
}

impl EnvCredentialResolver {
    pub fn new() -> Self {
        Self::with_var(CREDENTIAL_KEY)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver for EnvCredentialResolver {
    fn name(&self) -> &str {
        "environment"
    }

    fn resolve(&self) -> Option<Credential> {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Some(Credential::new(value)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so tests stay independent of
    // the process environment and of each other.

    #[test]
    fn test_resolves_from_environment() {
        unsafe { std::env::set_var("CONFAB_TEST_KEY_SET", "sk-env-value") };
        let resolver = EnvCredentialResolver::with_var("CONFAB_TEST_KEY_SET");
        let credential = resolver.resolve().unwrap();
        assert_eq!(credential.expose(), "sk-env-value");
        unsafe { std::env::remove_var("CONFAB_TEST_KEY_SET") };
    }

    #[test]
    fn test_missing_variable_is_none() {
        let resolver = EnvCredentialResolver::with_var("CONFAB_TEST_KEY_MISSING");
        assert!(resolver.resolve().is_none());
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        unsafe { std::env::set_var("CONFAB_TEST_KEY_EMPTY", "  ") };
        let resolver = EnvCredentialResolver::with_var("CONFAB_TEST_KEY_EMPTY");
        assert!(resolver.resolve().is_none());
        unsafe { std::env::remove_var("CONFAB_TEST_KEY_EMPTY") };
    }
}
