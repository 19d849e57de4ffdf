//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection on a board snapshot
//! - **Board view**: turns a cell activation into the next board, derives
//!   the status line and the winning-line highlight
//! - **Game**: owns the linear history of snapshots, the viewed move and
//!   the move-list order
//! - **View**: plain-data screen derived from the game after every change
//! - **Front ends**: a ratatui terminal UI and a headless replay
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Game, GameView, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! game.click(Position::TopLeft);
//! game.jump_to(1).unwrap();
//!
//! let view = GameView::derive(&game);
//! assert_eq!(view.status_text, "Next player: O");
//! assert_eq!(view.moves[1].label(), "You are at move #1 (1, 1)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod replay;
mod settings;
mod tui;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardView, CellView, Game, GameView, HistoryEntry, HistoryError, MoveListItem,
    Player, Position, SortOrder, Square, Status, WinningLine, move_list, rules,
};

// Crate-level exports - Headless replay
pub use replay::{Replay, ReplayError, ReplayPlan, run as run_replay};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
