//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Each submitted line is one explicit dispatch: the handler appends the
//! user turn, awaits the single in-flight completion request, and renders
//! the reply. Per-request failures keep the session usable.

use crate::ConsoleFormatter;
use confab_application::SendMessageUseCase;
use confab_domain::Session;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::time::Duration;

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: SendMessageUseCase,
    session: Session,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl owning the session
    pub fn new(use_case: SendMessageUseCase, session: Session) -> Self {
        Self {
            use_case,
            session,
            show_progress: true,
        }
    }

    /// Set whether to show a pending indicator while a request is in flight
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Input history only; the Conversation Log itself is never persisted
        let history_path = dirs::data_dir().map(|p| p.join("confab").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.session.initialize();
        self.print_welcome();
        self.replay_log();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Dispatch one chat round
                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Confab - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.session.model());
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /history  - Show the conversation so far");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Render the existing log on entry.
    fn replay_log(&self) {
        for turn in self.session.snapshot() {
            println!("{}", ConsoleFormatter::format_turn(turn));
        }
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /history         - Show the conversation so far");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/history" => {
                println!();
                if self.session.snapshot().is_empty() {
                    println!("(no turns yet)");
                } else {
                    self.replay_log();
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, input: &str) {
        let spinner = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Waiting for reply...");
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let result = self.use_case.execute(&mut self.session, input).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match result {
            Ok(reply) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_turn(&confab_domain::Turn::assistant(reply))
                );
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }
}
