//! Derives everything a front end shows from the game state.
//!
//! Front ends call [`GameView::derive`] after every state change and draw
//! the result. The view is plain data so it can also be printed or
//! serialized.

use serde::Serialize;
use tracing::{instrument, trace};

use super::board_view::{CellView, Status};
use super::game::Game;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveListItem {
    /// The move being viewed. Not activatable.
    Current {
        /// History index.
        move_number: usize,
        /// Text shown.
        label: String,
    },
    /// A control that jumps to another move.
    Jump {
        /// History index to jump to.
        move_number: usize,
        /// Text shown on the control.
        label: String,
    },
}

impl MoveListItem {
    /// History index of the row.
    pub fn move_number(&self) -> usize {
        match self {
            Self::Current { move_number, .. } | Self::Jump { move_number, .. } => *move_number,
        }
    }

    /// Text of the row.
    pub fn label(&self) -> &str {
        match self {
            Self::Current { label, .. } | Self::Jump { label, .. } => label,
        }
    }

    /// Move to jump to when the row is activated, `None` for the current move.
    pub fn jump_target(&self) -> Option<usize> {
        match self {
            Self::Current { .. } => None,
            Self::Jump { move_number, .. } => Some(*move_number),
        }
    }
}

/// Snapshot of the whole screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Status line.
    pub status: Status,
    /// Status line text.
    pub status_text: String,
    /// Nine cells in index order.
    pub cells: [CellView; 9],
    /// Label of the sort toggle.
    pub sort_label: &'static str,
    /// Move list in display order.
    pub moves: Vec<MoveListItem>,
}

impl GameView {
    /// Builds the view for the current state.
    #[instrument(skip(game), fields(current_move = game.current_move()))]
    pub fn derive(game: &Game) -> Self {
        let board = game.board_view();
        let status = board.status();
        let moves = move_list(game);
        trace!(rows = moves.len(), "Derived game view");

        Self {
            status,
            status_text: status.to_string(),
            cells: board.cells(),
            sort_label: game.sort().toggle_label(),
            moves,
        }
    }
}

/// Builds the move list in the game's display order.
pub fn move_list(game: &Game) -> Vec<MoveListItem> {
    let history = game.history();
    game.sort()
        .indices(history.len())
        .map(|move_number| {
            let location = history[move_number].location_label();
            if move_number == game.current_move() {
                MoveListItem::Current {
                    move_number,
                    label: format!("You are at move #{move_number} {location}")
                        .trim_end()
                        .to_string(),
                }
            } else if move_number > 0 {
                MoveListItem::Jump {
                    move_number,
                    label: format!("Go to move #{move_number} {location}"),
                }
            } else {
                MoveListItem::Jump {
                    move_number,
                    label: "Go to game start".to_string(),
                }
            }
        })
        .collect()
}

/// Plain-text rendering, used by the headless replay.
impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status_text)?;
        for row in self.cells.chunks(3) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let symbol = match cell.square.player() {
                        Some(_) => cell.square.symbol(),
                        None => ".",
                    };
                    if cell.winning {
                        format!("[{symbol}]")
                    } else {
                        format!(" {symbol} ")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        writeln!(f)?;
        writeln!(f, "<{}>", self.sort_label)?;
        for (row, item) in self.moves.iter().enumerate() {
            match item {
                MoveListItem::Current { label, .. } => writeln!(f, "{:>2}. {label}", row + 1)?,
                MoveListItem::Jump { label, .. } => writeln!(f, "{:>2}. [{label}]", row + 1)?,
            }
        }
        Ok(())
    }
}
