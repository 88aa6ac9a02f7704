//! Strictly Console - two-player tic-tac-toe on a text console
//!
//! # Architecture
//!
//! - **Games**: board, markers, and win/draw rules for tic-tac-toe
//! - **Console**: token-oriented text I/O over any reader/writer pair
//! - **Session**: turn management and the replayable round loop
//!
//! # Example
//!
//! ```
//! use strictly_console::{Console, GameSession};
//! use std::io::Cursor;
//!
//! // X takes the top row, then declines another round.
//! let input = Cursor::new(b"0 0\n1 0\n0 1\n1 1\n0 2\nn\n".to_vec());
//! let mut session = GameSession::new(Console::new(input, Vec::new()));
//! session.run()?;
//!
//! let transcript = String::from_utf8_lossy(session.console().output()).into_owned();
//! assert!(transcript.contains("Player X wins!"));
//! # Ok::<(), strictly_console::ConsoleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod session;

// Crate-level exports - Console I/O
pub use console::{Console, ConsoleError};

// Crate-level exports - Session management
pub use session::input::{
    COLUMN_PROMPT, InputError, REPLAY_PROMPT, ROW_PROMPT, parse_coordinate, parse_yes_no,
    read_coordinate, read_yes_no,
};
pub use session::{BANNER, DRAW_MESSAGE, FAREWELL, GameSession, SessionState};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardView, Cell, GameStatus, LINES, Mark, Move, MoveError, Player, SIZE, Seat,
};
