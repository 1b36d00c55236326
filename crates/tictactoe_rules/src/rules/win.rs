//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// One of the eight lines that win when uniformly marked.
///
/// Declaration order is evaluation order: rows top-to-bottom, columns
/// left-to-right, then the main and anti diagonal. When several lines are
/// complete at once the earliest one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Line {
    /// Row 0: cells 0, 1, 2.
    TopRow,
    /// Row 1: cells 3, 4, 5.
    MiddleRow,
    /// Row 2: cells 6, 7, 8.
    BottomRow,
    /// Column 0: cells 0, 3, 6.
    LeftColumn,
    /// Column 1: cells 1, 4, 7.
    CenterColumn,
    /// Column 2: cells 2, 5, 8.
    RightColumn,
    /// Diagonal: cells 0, 4, 8.
    MainDiagonal,
    /// Diagonal: cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices making up this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Checks whether the line contains the given position.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// A completed line: who made it and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player owning all three squares.
    pub player: Player,
    /// The winning triple.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in evaluation order together with
/// its owner, or `None` when no line is uniformly marked.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Win> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}
