//! Tic-tac-toe with move history and time travel.

mod board_view;
mod game;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use board_view::{BoardView, CellView, Status};
pub use game::Game;
pub use history::{HistoryEntry, HistoryError, SortOrder};
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveListItem, move_list};
