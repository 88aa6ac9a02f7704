//! The 3x3 board and its text view.

use super::rules;
use super::types::{Cell, Mark};
use std::fmt;
use tracing::{instrument, trace};

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Horizontal rule drawn above and below every row.
const RULE: &str = "-------------";

/// 3x3 tic-tac-toe board addressed by `(row, col)`.
///
/// Indices must lie in `0..SIZE`. Callers validate coordinates before
/// reaching the board; an out-of-range index panics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Marks a cell without checking occupancy.
    ///
    /// Call [`Board::is_empty`] first if overwriting must be avoided.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = Cell::Occupied(mark);
        trace!(row, col, %mark, "Cell marked");
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Returns true when `mark` owns a full row, column, or diagonal.
    pub fn has_line(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns a text view of the current board.
    ///
    /// The view borrows the board and holds no cursor, so it can be
    /// iterated or printed any number of times.
    pub fn render(&self) -> BoardView<'_> {
        BoardView { board: self }
    }
}

/// Bordered text rendering of a [`Board`].
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    /// Yields the rendered lines lazily, top rule first.
    pub fn lines(self) -> impl Iterator<Item = String> + 'a {
        std::iter::once(RULE.to_string()).chain(
            self.board
                .cells
                .iter()
                .flat_map(|row| [render_row(row), RULE.to_string()]),
        )
    }
}

fn render_row(row: &[Cell; SIZE]) -> String {
    let mut line = String::from("|");
    for cell in row {
        line.push(' ');
        line.push(cell.symbol());
        line.push_str(" |");
    }
    line
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
