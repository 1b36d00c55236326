//! Turn and state management for a single game session.

use super::rules::{self, Status};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Immutable view of a game at one point in time.
///
/// Renderers work from snapshots only, so they can never observe a
/// half-applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// The player whose mark goes down next.
    pub turn: Player,
}

impl Snapshot {
    /// Derives the status of this snapshot.
    pub fn status(&self) -> Status {
        rules::evaluate(&self.board, self.turn)
    }

    /// Checks whether a move at `pos` would be accepted: the square is
    /// empty and the game is still in progress.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.rejection(pos).is_none()
    }

    fn rejection(&self, pos: Position) -> Option<Rejection> {
        if self.status().is_over() {
            Some(Rejection::GameOver)
        } else if !self.board.is_empty(pos) {
            Some(Rejection::Occupied(pos))
        } else {
            None
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Rejection {
    #[display("square {} is already occupied", _0)]
    Occupied(Position),
    #[display("game is already over")]
    GameOver,
}

/// Tic-tac-toe game controller.
///
/// Owns the board and the turn. Moves that are not allowed (occupied
/// square, finished game) are ignored without touching either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: Snapshot,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the player whose mark goes down next.
    pub fn turn(&self) -> Player {
        self.state.turn
    }

    /// Returns an immutable copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state
    }

    /// Derives the current status from the board.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Checks whether a move at `pos` would be accepted.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.state.is_playable(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns `true` if the move was applied. An occupied square or a
    /// finished game leaves the board and turn unchanged and returns
    /// `false`. The turn passes to the opponent only while the game is
    /// still in progress after the move.
    #[instrument(skip(self), fields(player = %self.state.turn))]
    pub fn apply_move(&mut self, pos: Position) -> bool {
        if let Some(reason) = self.state.rejection(pos) {
            debug!(%reason, "Move ignored");
            return false;
        }

        let mut next = self.state;
        next.board.set(pos, Square::Occupied(next.turn));
        let status = next.status();
        if !status.is_over() {
            next.turn = next.turn.opponent();
        }
        self.state = next;

        debug!(?status, "Move applied");
        true
    }

    /// Index-based variant of [`Game::apply_move`].
    ///
    /// An index outside 0-8 is a caller bug; it is logged and ignored.
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, index: usize) -> bool {
        match Position::try_from(index) {
            Ok(pos) => self.apply_move(pos),
            Err(e) => {
                warn!(error = %e, "Ignoring move with invalid index");
                false
            }
        }
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = Snapshot::default();
    }
}
