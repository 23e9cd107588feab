//! Infrastructure layer for confab
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileModelConfig, FileReplConfig};
pub use credentials::{EnvCredentialResolver, SecretsFileResolver, default_chain};
pub use openai::OpenAiGateway;
