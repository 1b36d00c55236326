//! Command-line interface for ocean_tictactoe.

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Ocean Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "ocean_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "ocean_tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse (keyboard only)
    #[arg(long, global = true)]
    pub no_mouse: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play a game
    #[default]
    Play,

    /// Print the effective configuration as TOML
    ShowConfig,
}

impl Cli {
    /// The subcommand, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }

    /// Applies command-line overrides on top of the loaded configuration.
    #[instrument(skip(config))]
    pub fn apply_overrides(&self, config: AppConfig) -> AppConfig {
        let config = match &self.log_file {
            Some(path) => config.with_log_file(path.clone()),
            None => config,
        };
        if self.no_mouse {
            config.with_mouse(false)
        } else {
            config
        }
    }
}
