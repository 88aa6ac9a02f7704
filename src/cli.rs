//! Command-line interface for strictly_console.

use clap::Parser;

/// Strictly Console - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}
