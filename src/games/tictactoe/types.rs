//! Core domain types for tic-tac-toe.

use derive_new::new;

/// Marker identifying which player owns a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Mark {
    /// Marker X (plays first).
    #[display("X")]
    X,
    /// Marker O (plays second).
    #[display("O")]
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a marker.
    Occupied(Mark),
}

impl Cell {
    /// Returns the character shown for this cell when rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// A participant in the session.
///
/// Players never change after construction; turn order is tracked
/// by [`Seat`], not by comparing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Player {
    mark: Mark,
}

impl Player {
    /// Returns this player's marker.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Which of the two players holds the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Seat {
    /// The player who opens every round.
    #[default]
    First,
    /// The player who answers.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element player array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Status of the round after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a completed line.
    Won(Mark),
    /// Round ended with a full board and no line.
    Draw,
}
