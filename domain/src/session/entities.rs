//! Session domain entities
//!
//! The Conversation Log is a display/replay log, not a transactional
//! structure: a failed exchange may leave a user Turn without a paired
//! assistant Turn, and that is acceptable.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation (Entity)
///
/// Immutable once created. Ordering in the log is conversation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only ordered history of Turns for one session (Entity)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Add a turn to the end of the log. No size bound, no compaction.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Read-only view of the log in insertion order.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// An interactive chat session (Entity)
///
/// Explicit session context object: the Conversation Log lives here and is
/// passed by reference into the core functions, with its lifecycle tied to
/// the session rather than ambient global state. The completion adapter
/// never mutates the log; the session owner appends both the outgoing user
/// Turn and the returned assistant Turn.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    model: Model,
    log: Option<ConversationLog>,
}

impl Session {
    pub fn new(id: impl Into<String>, model: Model) -> Self {
        Self {
            id: id.into(),
            model,
            log: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Create an empty log if none exists yet.
    ///
    /// Idempotent: safe to call on every re-entry; an existing log is
    /// never cleared or reordered.
    pub fn initialize(&mut self) {
        if self.log.is_none() {
            self.log = Some(ConversationLog::new());
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.log.is_some()
    }

    /// Current log contents; empty when the session is uninitialized.
    pub fn snapshot(&self) -> &[Turn] {
        self.log.as_ref().map(|log| log.snapshot()).unwrap_or(&[])
    }

    pub fn append_user(&mut self, content: impl Into<String>) {
        self.append(Turn::user(content));
    }

    pub fn append_assistant(&mut self, content: impl Into<String>) {
        self.append(Turn::assistant(content));
    }

    fn append(&mut self, turn: Turn) {
        self.log.get_or_insert_with(ConversationLog::new).append(turn);
    }
}
