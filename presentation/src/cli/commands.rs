//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for confab
#[derive(Parser, Debug)]
#[command(name = "confab")]
#[command(author, version, about = "Chat with a hosted completion model from the terminal")]
#[command(long_about = r#"
Confab forwards your messages to an OpenAI-compatible chat-completion
endpoint and renders the conversation turn by turn.

The API key is resolved once at startup, in order:
1. ~/.config/confab/secrets.toml   (OPENAI_API_KEY = "...")
2. OPENAI_API_KEY environment variable

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./confab.toml       Project-level config
3. ~/.config/confab/config.toml   Global config

Example:
  confab "What's the best way to handle errors in Rust?"
  confab --chat -m gpt-4o-mini
"#)]
pub struct Cli {
    /// Message to send (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Completion model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the pending indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
