//! Application layer for confab
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::completion_gateway::{CompletionError, CompletionGateway, ErrorKind};
pub use ports::credential_resolver::{
    CredentialChain, CredentialError, CredentialResolver, ResolvedCredential,
};
pub use use_cases::send_message::{SendMessageError, SendMessageUseCase};
