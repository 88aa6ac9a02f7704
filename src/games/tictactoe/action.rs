//! First-class move types for tic-tac-toe.
//!
//! A move captures a player's intent (marker plus coordinates) and can be
//! validated against a board before it is applied.

use super::board::{Board, SIZE};
use super::types::Mark;
use derive_new::new;
use tracing::instrument;

/// A marker placed at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new, derive_more::Display)]
#[display("Player {mark} placed at ({row},{col})")]
pub struct Move {
    /// Marker being placed.
    pub mark: Mark,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl Move {
    /// Checks that the move lands on an empty cell inside the board.
    #[instrument(skip(board))]
    pub fn validate(&self, board: &Board) -> Result<(), MoveError> {
        if self.row >= SIZE || self.col >= SIZE {
            return Err(MoveError::OutOfBounds {
                row: self.row,
                col: self.col,
            });
        }
        if !board.is_empty(self.row, self.col) {
            return Err(MoveError::Occupied {
                row: self.row,
                col: self.col,
            });
        }
        Ok(())
    }
}

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[display("Invalid coordinates! Please choose a row and column between 0 and 2.")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({row},{col}) is already occupied. Please choose an empty cell.")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
