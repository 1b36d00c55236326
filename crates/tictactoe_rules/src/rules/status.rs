//! Game status derived from a board.

use super::super::{Board, Player};
use super::draw::is_full;
use super::win::{Win, check_winner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
///
/// Never stored: always recomputed from the board (and the turn, for the
/// in-progress payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing; the payload is the player to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

impl Status {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }

    /// Returns the win, if the game has been won.
    pub fn win(&self) -> Option<Win> {
        match self {
            Status::Won(win) => Some(*win),
            _ => None,
        }
    }

    /// Returns the player to move while the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Status::InProgress(player) => Some(*player),
            _ => None,
        }
    }
}

/// Projects a board and turn into a status.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board, turn: Player) -> Status {
    if let Some(win) = check_winner(board) {
        Status::Won(win)
    } else if is_full(board) {
        Status::Draw
    } else {
        Status::InProgress(turn)
    }
}
