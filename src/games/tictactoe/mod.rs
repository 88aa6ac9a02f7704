//! Tic-tac-toe: markers, the board, and the rules that judge it.

mod action;
mod board;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardView, SIZE};
pub use rules::LINES;
pub use types::{Cell, GameStatus, Mark, Player, Seat};
