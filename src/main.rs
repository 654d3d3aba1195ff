//! Strictly Guessing - CLI entry point.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_guessing::{
    AuthService, CredentialStore, FlowController, GateConfig, Message, run_tui,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GateConfig::load_or_default(&cli.config)?;
    if let Some(users_file) = cli.users_file {
        config = config.with_users_file(users_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Register { username, password } => run_register(config, &username, &password),
    }
}

/// Run the terminal UI
fn run_play(config: GateConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Strictly Guessing TUI");

    let (store, notice) = open_store(&config);
    let controller = FlowController::new(AuthService::new(store));
    run_tui(controller, notice)
}

/// Register an account and exit
#[instrument(skip(config, password))]
fn run_register(config: GateConfig, username: &str, password: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    let store = CredentialStore::load(config.users_file())?;
    let mut auth = AuthService::new(store);
    match auth.register(username.trim(), password) {
        Ok(()) => {
            println!("{}", Message::Registered);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Registration failed");
            Err(anyhow::anyhow!("{}", e))
        }
    }
}

/// Loads the credential store, degrading to an empty read-only one if the file is unreadable.
#[instrument(skip(config))]
fn open_store(config: &GateConfig) -> (CredentialStore, Option<Message>) {
    let (store, error) = CredentialStore::load_or_empty(config.users_file());
    let notice = error.map(|e| Message::StoreUnavailable(e.kind.to_string()));
    (store, notice)
}

fn env_filter(config: &GateConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
