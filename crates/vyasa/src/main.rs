//! Vyasa CLI binary.
//!
//! This binary provides command-line access to Vyasa's functionality:
//! - Generate an original mini-myth from a theme, tone, and length
//! - Expand and narrate the current myth interactively
//! - One-shot generation for scripting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, run_once, run_repl};
    use std::sync::Arc;
    use vyasa::{GeminiClient, MythSession, RodioNarrator, VyasaConfig};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = VyasaConfig::load()?;
    let driver = Arc::new(GeminiClient::new(&config)?);
    let sink = Arc::new(RodioNarrator::new()?);
    let session = MythSession::spawn(driver, sink, &config);

    let options = cli.initial_options();
    if cli.once {
        run_once(session, options, cli.narrate).await?;
    } else {
        run_repl(session, options).await?;
    }

    Ok(())
}
