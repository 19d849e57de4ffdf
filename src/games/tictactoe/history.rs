//! Move history: board snapshots indexed by move number.

use serde::{Deserialize, Serialize};

use super::{Board, Position};

/// One snapshot in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played. `None` for the initial empty board.
    location: Option<Position>,
}

impl HistoryEntry {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// A snapshot produced by a move at `location`.
    pub fn new(board: Board, location: Option<Position>) -> Self {
        Self { board, location }
    }

    /// The move location as `(row, col)`, or an empty string.
    pub fn location_label(&self) -> String {
        self.location.map(|pos| pos.to_string()).unwrap_or_default()
    }
}

/// Order in which the move list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }

    /// History indices `0..len` in display order.
    pub fn indices(self, len: usize) -> Box<dyn Iterator<Item = usize>> {
        match self {
            Self::Ascending => Box::new(0..len),
            Self::Descending => Box::new((0..len).rev()),
        }
    }
}

/// Error navigating the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested move has not been played on this branch.
    #[display("Move #{requested} does not exist (history has {len} entries)")]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// Current history length.
        len: usize,
    },
}
