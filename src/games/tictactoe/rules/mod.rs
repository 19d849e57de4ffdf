//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are kept apart
//! from history bookkeeping so views can call them on any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};
