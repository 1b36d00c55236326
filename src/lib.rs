//! Ocean Tic Tac Toe - two-player tic-tac-toe in the terminal
//!
//! # Architecture
//!
//! - **Rules**: win evaluation and turn management live in the
//!   [`tictactoe_rules`] crate.
//! - **View**: [`GameView`] projects a game snapshot into status text, cell
//!   labels and highlight flags.
//! - **TUI**: ratatui rendering, mouse hit-testing and the event loop
//!   ([`tui`]).
//! - **Config**: TOML configuration and the colour theme ([`AppConfig`]).
//!
//! # Example
//!
//! ```
//! use ocean_tictactoe::GameView;
//! use tictactoe_rules::Game;
//!
//! let mut game = Game::new();
//! game.apply_move_at(0);
//! let view = GameView::from_snapshot(&game.snapshot());
//! assert_eq!(view.status_text(), "Current turn: O");
//! assert_eq!(view.cells()[0].label(), "Cell 1, X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod theme;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};
pub use theme::{Palette, ThemeConfig};

// Crate-level exports - Presentation
pub use tui::{Action, App, CellView, GameView, ScreenLayout, StatusTone, Target};
