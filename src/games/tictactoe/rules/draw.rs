//! Draw detection logic for tic-tac-toe.

use super::super::board::Board;
use super::super::types::Cell;

/// Checks if the board is full (no empty cells).
///
/// A full board with no completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}
