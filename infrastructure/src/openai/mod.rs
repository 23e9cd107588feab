//! OpenAI-compatible chat-completions adapter

pub mod gateway;
pub mod wire;

pub use gateway::OpenAiGateway;
