//! Command-line interface for strictly_guessing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strictly_guessing::DEFAULT_CONFIG_FILE;

/// Strictly Guessing - number guessing game behind a login gate
#[derive(Parser, Debug)]
#[command(name = "strictly_guessing")]
#[command(about = "Guess the number from 1 to 100 in five tries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Credentials file, overriding the configured one
    #[arg(long)]
    pub users_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the terminal UI
    Play,

    /// Register an account without starting the UI
    Register {
        /// Letters only
        username: String,

        /// Stored as-is
        password: String,
    },
}
