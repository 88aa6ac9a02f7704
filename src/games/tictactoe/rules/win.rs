//! Win detection logic for tic-tac-toe.

use super::super::board::Board;
use super::super::types::{Cell, Mark};
use tracing::{debug, instrument};

/// The eight winning lines as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `mark` owns all three cells of any line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    let found = LINES
        .iter()
        .position(|line| line.iter().all(|&(row, col)| board.get(row, col) == target));

    if let Some(index) = found {
        debug!(%mark, line = index, "Line completed");
    }
    found.is_some()
}
