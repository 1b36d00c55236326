//! View model: a pure projection of a game snapshot into display data.
//!
//! Everything the renderer shows (status text, cell marks, accessible
//! labels, interactivity and highlight flags) is computed here, so it can be
//! tested without a terminal.

use derive_getters::Getters;
use tictactoe_rules::{Player, Position, Snapshot, Status};
use tracing::instrument;

/// Application title shown in the header.
pub const TITLE: &str = "Tic Tac Toe";
/// Subtitle shown under the title.
pub const SUBTITLE: &str = "Two players. Take turns. First to three in a row wins.";
/// Footer line.
pub const FOOTER: &str = "Built with the Ocean Professional theme";
/// Accessible name of the grid.
pub const GRID_LABEL: &str = "Tic Tac Toe grid";
/// Caption on the reset button.
pub const RESET_CAPTION: &str = "New Game";
/// Accessible name of the reset button.
pub const RESET_LABEL: &str = "Start a new game";

/// Styling class of the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Game in progress.
    Turn,
    /// Someone won.
    Win,
    /// Draw.
    Draw,
}

/// Display data for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CellView {
    /// Which cell this is.
    position: Position,
    /// Mark on the cell, if any.
    mark: Option<Player>,
    /// Accessible label, e.g. `Cell 5, X`.
    label: String,
    /// Occupied cells read as pressed.
    pressed: bool,
    /// Whether clicking the cell can place a mark.
    interactive: bool,
    /// Part of the winning triple.
    winning: bool,
}

/// Display data for the whole screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Status line text.
    status_text: String,
    /// Status styling.
    tone: StatusTone,
    /// The nine cells in row-major order.
    cells: Vec<CellView>,
    /// The grid accepts no more moves.
    read_only: bool,
}

impl GameView {
    /// Builds the view for a snapshot.
    #[instrument(level = "trace")]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let status = snapshot.status();
        let over = status.is_over();
        let win = status.win();

        let cells = Position::ALL
            .into_iter()
            .map(|position| {
                let mark = snapshot.board.get(position).mark();
                CellView {
                    position,
                    mark,
                    label: cell_label(position, mark),
                    pressed: mark.is_some(),
                    interactive: snapshot.is_playable(position),
                    winning: win.is_some_and(|w| w.line.contains(position)),
                }
            })
            .collect();

        let tone = match status {
            Status::InProgress(_) => StatusTone::Turn,
            Status::Won(_) => StatusTone::Win,
            Status::Draw => StatusTone::Draw,
        };

        Self {
            status_text: status_text(&status),
            tone,
            cells,
            read_only: over,
        }
    }

    /// The view of a single cell.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }
}

/// Status line for a game status.
pub fn status_text(status: &Status) -> String {
    match status {
        Status::InProgress(player) => format!("Current turn: {}", player),
        Status::Won(win) => format!("Winner: {}", win.player),
        Status::Draw => "It's a draw".to_string(),
    }
}

/// Accessible label for a cell: 1-based position and its mark.
pub fn cell_label(position: Position, mark: Option<Player>) -> String {
    match mark {
        Some(player) => format!("Cell {}, {}", position.number(), player),
        None => format!("Cell {}, empty", position.number()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rules::Game;

    fn view_after(indices: &[usize]) -> GameView {
        let mut game = Game::new();
        for &i in indices {
            game.apply_move_at(i);
        }
        GameView::from_snapshot(&game.snapshot())
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(view_after(&[]).status_text(), "Current turn: X");
        assert_eq!(view_after(&[4]).status_text(), "Current turn: O");
        assert_eq!(view_after(&[0, 4, 1, 5, 2]).status_text(), "Winner: X");
        assert_eq!(view_after(&[4, 0, 8, 1, 5, 2]).status_text(), "Winner: O");
        assert_eq!(view_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).status_text(), "It's a draw");
    }

    #[test]
    fn test_tones() {
        assert_eq!(*view_after(&[]).tone(), StatusTone::Turn);
        assert_eq!(*view_after(&[0, 4, 1, 5, 2]).tone(), StatusTone::Win);
        assert_eq!(*view_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).tone(), StatusTone::Draw);
    }

    #[test]
    fn test_cell_labels_are_one_based() {
        let view = view_after(&[0, 8]);
        assert_eq!(view.cell(Position::TopLeft).label(), "Cell 1, X");
        assert_eq!(view.cell(Position::Center).label(), "Cell 5, empty");
        assert_eq!(view.cell(Position::BottomRight).label(), "Cell 9, O");
    }

    #[test]
    fn test_interactivity_in_progress() {
        let view = view_after(&[4]);
        assert!(!view.read_only());
        let center = view.cell(Position::Center);
        assert!(*center.pressed());
        assert!(!center.interactive());
        assert!(*view.cell(Position::TopLeft).interactive());
    }

    #[test]
    fn test_winning_cells_flagged_and_grid_read_only() {
        let view = view_after(&[0, 4, 1, 5, 2]);
        assert!(*view.read_only());
        let winning: Vec<usize> = view
            .cells()
            .iter()
            .filter(|c| *c.winning())
            .map(|c| c.position().to_index())
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
        assert!(view.cells().iter().all(|c| !c.interactive()));
    }

    #[test]
    fn test_draw_has_no_winning_cells() {
        let view = view_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(view.cells().iter().all(|c| !c.winning() && *c.pressed()));
    }

    #[test]
    fn test_interactive_follows_controller() {
        let mut game = Game::new();
        for i in [0, 4, 8, 2] {
            game.apply_move_at(i);
        }
        let view = GameView::from_snapshot(&game.snapshot());
        for pos in Position::ALL {
            assert_eq!(*view.cell(pos).interactive(), game.is_playable(pos), "{pos:?}");
        }
    }
}
