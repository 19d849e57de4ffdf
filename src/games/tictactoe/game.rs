//! Game controller: owns the history and the move being viewed.
//!
//! History is linear. Playing from an earlier snapshot discards every
//! snapshot after it before the new one is appended.

use tracing::{debug, info, instrument};

use super::board_view::{BoardView, Status};
use super::history::{HistoryEntry, HistoryError, SortOrder};
use super::rules::WinningLine;
use super::{Board, Player, Position};

/// Tic-tac-toe game with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<HistoryEntry>,
    current_move: usize,
    sort: SortOrder,
}

impl Game {
    /// Creates a new game at the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_move: 0,
            sort,
        }
    }

    /// Every snapshot on the current branch, index = move number.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Move number currently viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move-list display order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The board currently viewed.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// X moves on even move numbers.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Player to move from the viewed snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// The viewed board bound to the turn flag.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_board(), self.x_is_next())
    }

    /// Status line for the viewed snapshot.
    pub fn status(&self) -> Status {
        self.board_view().status()
    }

    /// Winning line on the viewed snapshot.
    pub fn winner(&self) -> Option<WinningLine> {
        self.board_view().winner()
    }

    /// Records a completed move reported by the board view.
    ///
    /// The location is the first square, in index order, where `next_board`
    /// differs from the viewed snapshot.
    #[instrument(skip(self, next_board), fields(current_move = self.current_move))]
    pub fn play(&mut self, next_board: Board) {
        let location = next_board.first_difference(self.current_board());
        if location.is_none() {
            debug!("Reported board is identical to the current snapshot");
        }

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::new(next_board, location));
        self.current_move = self.history.len() - 1;

        info!(
            move_number = self.current_move,
            location = ?location,
            discarded,
            "Move recorded"
        );
    }

    /// Activates a cell on the viewed board.
    ///
    /// Returns `true` when the activation produced a move. Activations on a
    /// finished game or an occupied square change nothing.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> bool {
        let next_board = self.board_view().activate(pos);
        match next_board {
            Some(next_board) => {
                self.play(next_board);
                true
            }
            None => false,
        }
    }

    /// Views the snapshot after move `target`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), HistoryError> {
        if target >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: target,
                len: self.history.len(),
            });
        }
        self.current_move = target;
        info!(target, "Jumped to move");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
        info!(sort = ?self.sort, "Move list order changed");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
