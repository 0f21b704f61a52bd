//! Strictly Trivia - Unified CLI
//!
//! Terminal trivia board with a non-interactive board dump.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_trivia::{GameSession, HttpTriviaClient, SetupCompletion, TriviaConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { api_url, config } => {
            let config = TriviaConfig::resolve(&config, api_url)?;
            strictly_trivia::tui::run_tui(config).await
        }
        Command::Board {
            api_url,
            config,
            reveal,
        } => run_board(&config, api_url, reveal).await,
    }
}

/// Fetch a board and print it to stdout
#[instrument(skip(config_path))]
async fn run_board(config_path: &Path, api_url: Option<String>, reveal: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TriviaConfig::resolve(config_path, api_url)?;
    let client = HttpTriviaClient::from_config(&config)?;

    info!(api_base_url = %client.base_url(), "Fetching board");
    let mut session = GameSession::new();
    if session.setup(&client).await != SetupCompletion::Applied {
        let reason = session.view().error().unwrap_or("unknown error").to_string();
        anyhow::bail!("Failed to load board: {}", reason);
    }

    if reveal {
        session.reveal_all();
    }

    if let Some(grid) = session.grid() {
        println!("{}", grid.display());
    }
    Ok(())
}
