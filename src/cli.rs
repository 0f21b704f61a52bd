//! Command-line interface for strictly_trivia.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Trivia - Jeopardy-style trivia board in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_trivia")]
#[command(about = "Trivia board game backed by a jservice-compatible API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Trivia API base URL (overrides config and environment)
        #[arg(long)]
        api_url: Option<String>,

        /// Path to config file
        #[arg(short, long, default_value = "strictly_trivia.toml")]
        config: PathBuf,
    },

    /// Fetch one board and print it as text
    Board {
        /// Trivia API base URL (overrides config and environment)
        #[arg(long)]
        api_url: Option<String>,

        /// Path to config file
        #[arg(short, long, default_value = "strictly_trivia.toml")]
        config: PathBuf,

        /// Reveal every answer before printing
        #[arg(long)]
        reveal: bool,
    },
}
