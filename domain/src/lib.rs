//! Domain layer for confab
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turn
//!
//! One message in a conversation, tagged with the speaker role and text
//! content. Turns are immutable once created.
//!
//! ## Conversation Log
//!
//! The ordered, append-only history of Turns for one session. Insertion
//! order is conversation order; there is no deletion or edit operation.

pub mod core;
pub mod session;

// Re-export commonly used types
pub use core::credential::Credential;
pub use core::model::Model;
pub use session::entities::{ConversationLog, Role, Session, Turn};
