//! Headless replay: apply a sequence of cell activations and report the view.

use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

use crate::{Game, GameView, HistoryError, Position, SortOrder};

/// Error running a replay.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A cell index outside 0-8.
    #[display("Cell {index} is not on the board (expected 0-8)")]
    InvalidCell {
        /// Index given on the command line.
        index: usize,
    },
    /// The final jump targets a move that does not exist.
    #[display("Cannot jump: {source}")]
    Jump {
        /// Underlying history error.
        source: HistoryError,
    },
}

/// What to replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayPlan {
    /// Cell indices activated in order.
    pub cells: Vec<usize>,
    /// Move to view once all cells are activated.
    pub jump: Option<usize>,
    /// Move-list order for the report.
    pub sort: SortOrder,
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Final game state.
    pub game: Game,
    /// Indices into the plan whose activation was ignored.
    pub ignored: Vec<usize>,
}

impl Replay {
    /// View of the final state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.game)
    }
}

/// Runs a replay plan against a fresh game.
///
/// Cells are validated before any is played, so a bad index leaves no
/// partial game behind.
#[instrument]
pub fn run(plan: &ReplayPlan) -> Result<Replay, ReplayError> {
    let positions = plan
        .cells
        .iter()
        .map(|&index| Position::from_index(index).ok_or(ReplayError::InvalidCell { index }))
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = Game::with_sort(plan.sort);
    let mut ignored = Vec::new();
    for (step, pos) in positions.into_iter().enumerate() {
        if !game.click(pos) {
            warn!(step, cell = pos.to_index(), "Activation ignored");
            ignored.push(step);
        }
    }

    if let Some(target) = plan.jump {
        game.jump_to(target)
            .map_err(|source| ReplayError::Jump { source })?;
    }

    info!(
        moves = game.history().len() - 1,
        ignored = ignored.len(),
        "Replay finished"
    );
    Ok(Replay { game, ignored })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cell_rejected() {
        let plan = ReplayPlan {
            cells: vec![0, 9],
            ..ReplayPlan::default()
        };
        assert_eq!(run(&plan).unwrap_err(), ReplayError::InvalidCell { index: 9 });
    }

    #[test]
    fn test_ignored_steps_reported() {
        let plan = ReplayPlan {
            cells: vec![4, 4, 0],
            ..ReplayPlan::default()
        };
        let replay = run(&plan).unwrap();
        assert_eq!(replay.ignored, vec![1]);
        assert_eq!(replay.game.current_move(), 2);
    }
}
