//! CLI entrypoint for confab
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use confab_application::SendMessageUseCase;
use confab_domain::{Model, Session};
use confab_infrastructure::{ConfigLoader, OpenAiGateway, default_chain};
use confab_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting confab");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let model = Model::new(cli.model.as_deref().unwrap_or(&config.model.name));

    // Resolve the credential once, before any request. A miss is fatal:
    // the session never starts.
    let resolved = match default_chain().resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_credential_error(&e));
            std::process::exit(1);
        }
    };
    info!("API key resolved from {}", resolved.source);

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::with_base_url(
        resolved.credential,
        &config.model.base_url,
    ));
    let use_case = SendMessageUseCase::new(gateway);
    let mut session = Session::new("interactive", model);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, session)
            .with_progress(!cli.quiet && config.repl.show_progress);
        repl.run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --chat for interactive mode."),
    };
    match use_case.execute(&mut session, &message).await {
        Ok(reply) => {
            println!("{}", reply);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            std::process::exit(1);
        }
    }
}
