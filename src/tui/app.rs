//! Application state and event handling.

use std::ops::ControlFlow;

use crossterm::event::Event;
use derive_getters::Getters;
use ratatui::Frame;
use tictactoe_rules::{Game, Position};
use tracing::{debug, info, instrument};

use super::input::{Action, action_for, move_cursor};
use super::layout::ScreenLayout;
use super::ui;
use super::view::GameView;
use crate::theme::Palette;

/// Main application state.
///
/// Owns the game for one session, the keyboard cursor and the layout of the
/// last drawn frame (for mouse hit-testing).
#[derive(Debug, Getters)]
pub struct App {
    /// The game session.
    game: Game,
    /// Keyboard cursor cell.
    cursor: Position,
    /// Layout of the last drawn frame.
    layout: Option<ScreenLayout>,
    /// Resolved theme colours.
    palette: Palette,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(palette: Palette) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            layout: None,
            palette,
        }
    }

    /// Projects the current game into display data.
    pub fn view(&self) -> GameView {
        GameView::from_snapshot(&self.game.snapshot())
    }

    /// Draws the current state and remembers where everything went.
    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = ScreenLayout::new(frame.area());
        ui::draw(frame, &self.view(), &layout, &self.palette, self.cursor);
        self.layout = Some(layout);
    }

    /// Handles a terminal event.
    ///
    /// Returns `Break` when the user asked to quit.
    pub fn handle_event(&mut self, event: &Event) -> ControlFlow<()> {
        match action_for(event, self.layout.as_ref()) {
            Some(action) => self.apply(action),
            None => ControlFlow::Continue(()),
        }
    }

    /// Applies a user action to the game.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> ControlFlow<()> {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Reset => {
                info!("Starting a new game");
                self.game.reset();
            }
            Action::Quit => {
                info!("User quit");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn play(&mut self, pos: Position) {
        if self.game.apply_move(pos) {
            debug!(status = ?self.game.status(), "Board updated");
        }
    }
}
