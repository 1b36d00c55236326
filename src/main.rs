//! Ocean Tic Tac Toe - CLI entry point.

#![warn(missing_docs)]

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ocean_tictactoe::{AppConfig, Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply_overrides(AppConfig::load_or_default(&cli.config)?);

    match cli.command() {
        Command::Play => {
            initialize_tracing(&config)?;
            ocean_tictactoe::tui::run(&config)
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Logs go to a file so they never draw over the game.
#[instrument(skip(config))]
fn initialize_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,ocean_tictactoe=debug,tictactoe_rules=debug")
            }),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}
