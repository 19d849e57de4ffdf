//! The board as seen by whoever is about to move.
//!
//! A [`BoardView`] binds a snapshot to a turn flag. It decides whether a
//! cell activation turns into a move, and derives the status line and the
//! winning-line highlight. Nothing here is stored between renders.

use serde::Serialize;
use tracing::{debug, instrument};

use super::rules::{WinningLine, check_winner, is_full};
use super::{Board, Player, Position, Square};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A line of three is complete.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every square is taken and nobody won.
    #[display("Draw")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// A single rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// What occupies it.
    pub square: Square,
    /// Whether the cell belongs to the winning line.
    pub winning: bool,
}

/// A board snapshot together with whose turn it is.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    x_is_next: bool,
    winner: Option<WinningLine>,
}

impl<'a> BoardView<'a> {
    /// Binds a board to the turn flag.
    pub fn new(board: &'a Board, x_is_next: bool) -> Self {
        Self {
            board,
            x_is_next,
            winner: check_winner(board),
        }
    }

    /// The player who would place the next mark.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// The completed line, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        self.winner
    }

    /// Handles activation of a cell.
    ///
    /// Returns the next board, or `None` when the activation is ignored
    /// because the game is already won or the square is taken.
    #[instrument(skip(self), fields(next = %self.next_player()))]
    pub fn activate(&self, pos: Position) -> Option<Board> {
        if let Some(line) = self.winner {
            debug!(winner = %line.winner, "Ignoring activation after game end");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring activation of occupied square");
            return None;
        }
        Some(self.board.with_mark(pos, self.next_player()))
    }

    /// Derives the status line.
    pub fn status(&self) -> Status {
        match self.winner {
            Some(line) => Status::Winner(line.winner),
            None if is_full(self.board) => Status::Draw,
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Derives the nine cells in index order.
    pub fn cells(&self) -> [CellView; 9] {
        Position::ALL.map(|position| CellView {
            position,
            square: self.board.get(position),
            winning: self.winner.is_some_and(|line| line.contains(position)),
        })
    }
}
