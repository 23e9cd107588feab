//! Console formatting for turns and errors

use colored::Colorize;
use confab_application::{CompletionError, CredentialError, SendMessageError};
use confab_domain::{Role, Turn};

/// Formats turns and errors for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One turn, keyed by role.
    pub fn format_turn(turn: &Turn) -> String {
        let prefix = match turn.role {
            Role::User => "you".cyan().bold(),
            Role::Assistant => "assistant".green().bold(),
        };
        format!("{}: {}", prefix, turn.content)
    }

    /// A per-request failure with its guidance line.
    pub fn format_error(error: &SendMessageError) -> String {
        match error {
            SendMessageError::Completion(e) => Self::format_completion_error(e),
            other => format!("{} {}", "error:".red().bold(), other),
        }
    }

    pub fn format_completion_error(error: &CompletionError) -> String {
        format!(
            "{} {}\n{} {}",
            "error:".red().bold(),
            error,
            "hint:".yellow().bold(),
            error.guidance()
        )
    }

    /// The fatal startup error for a missing credential.
    pub fn format_credential_error(error: &CredentialError) -> String {
        format!(
            "{} {}\n{} Put OPENAI_API_KEY = \"...\" in ~/.config/confab/secrets.toml \
             or export the OPENAI_API_KEY environment variable.",
            "error:".red().bold(),
            error,
            "hint:".yellow().bold(),
        )
    }
}
