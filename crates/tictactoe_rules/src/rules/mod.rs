//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the controller and any renderer can share them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{Status, evaluate};
pub use win::{Line, Win, check_winner};
