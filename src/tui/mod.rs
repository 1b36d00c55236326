//! Terminal UI for Ocean Tic Tac Toe.
//!
//! The screen is redrawn from a fresh snapshot after every event; nothing
//! is cached between frames except the layout used for mouse hit-testing.

mod app;
mod input;
mod layout;
mod ui;
mod view;

pub use app::App;
pub use input::{Action, Direction, action_for, move_cursor};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, Target};
pub use ui::draw;
pub use view::{
    CellView, FOOTER, GRID_LABEL, GameView, RESET_CAPTION, RESET_LABEL, SUBTITLE, StatusTone,
    TITLE, cell_label, status_text,
};

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument, warn};

use crate::config::AppConfig;

/// Puts the terminal into raw/alternate-screen mode and restores it on drop.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self { mouse };
        execute!(io::stdout(), EnterAlternateScreen)?;
        if mouse {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if self.mouse
            && let Err(e) = execute!(io::stdout(), DisableMouseCapture)
        {
            warn!(error = %e, "Failed to disable mouse capture");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Runs the game until the user quits.
#[instrument(skip(config), fields(mouse = *config.mouse()))]
pub fn run(config: &AppConfig) -> Result<()> {
    let palette = config.theme().palette()?;

    info!("Starting Ocean Tic Tac Toe");

    let _guard = TerminalGuard::enter(*config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(palette));
    finish(res, terminal.show_cursor())
}

/// The game loop's result wins over a failed cursor restore.
fn finish(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    if let Err(e) = restored {
        warn!(error = %e, "Failed to show cursor");
    }
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, handle it, repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        let event = event::read()?;
        if app.handle_event(&event).is_break() {
            return Ok(());
        }
    }
}
