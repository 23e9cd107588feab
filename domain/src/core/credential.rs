//! Credential value object for the completion endpoint

/// API key authorizing calls to the completion endpoint (Value Object)
///
/// Resolved once at session startup and read-only thereafter. The value is
/// redacted in `Debug` and `Display` output so it never reaches logs in
/// cleartext; [`Credential::expose`] is the only way to read it back.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Access the raw secret for building the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(****)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "****")
    }
}
