//! Strictly Console - interactive tic-tac-toe
//!
//! Plays rounds on stdin/stdout until the players decline a rematch.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_console::{Console, GameSession};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_filter);

    run_console_game()
}

/// Run a session over the process stdin/stdout.
#[instrument]
fn run_console_game() -> Result<()> {
    info!("Starting console session");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let mut session = GameSession::new(Console::new(stdin, stdout));

    session.run().context("Console session aborted")?;

    info!(rounds = session.round(), "Console session finished");
    Ok(())
}

#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
