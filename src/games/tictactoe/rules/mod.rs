//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage so the board only owns cells.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_line};
