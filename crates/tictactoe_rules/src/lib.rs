//! Pure tic-tac-toe game logic.
//!
//! - **Rules**: win evaluation over the eight fixed lines, draw detection,
//!   and status derivation ([`rules`]).
//! - **Game**: the controller owning board and turn ([`Game`]).
//!
//! No I/O happens here; every status is a projection of a [`Board`].
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Game, Line, Player, Status};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move_at(index);
//! }
//! let win = game.status().win().unwrap();
//! assert_eq!(win.player, Player::X);
//! assert_eq!(win.line, Line::TopRow);
//! assert!(!game.apply_move_at(3));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{Game, Snapshot};
pub use position::{Position, PositionOutOfRange};
pub use rules::{Line, Status, Win, check_winner};
pub use types::{Board, Player, Square};
