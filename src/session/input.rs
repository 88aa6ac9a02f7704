//! Retry-until-valid prompts for coordinates and replay answers.

use crate::console::{Console, ConsoleError};
use crate::games::tictactoe::SIZE;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Prompt for a move's row.
pub const ROW_PROMPT: &str = "Enter row (0-2): ";
/// Prompt for a move's column.
pub const COLUMN_PROMPT: &str = "Enter column (0-2): ";
/// Question asked at the end of every round.
pub const REPLAY_PROMPT: &str = "Do you want to play again? (y/n): ";

/// A rejected answer. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Token is not an integer.
    #[display("Invalid input. Please enter a number.")]
    NotANumber,
    /// Integer lies outside the board.
    #[display("Please enter a number between 0 and 2.")]
    OutOfRange,
    /// Replay answer is neither `y` nor `n`.
    #[display("Invalid input. Please enter 'y' or 'n': ")]
    InvalidYesNo,
}

/// Parses a row or column index in `0..SIZE`.
pub fn parse_coordinate(token: &str) -> Result<usize, InputError> {
    let value: i32 = token.parse().map_err(|_| InputError::NotANumber)?;
    usize::try_from(value)
        .ok()
        .filter(|&v| v < SIZE)
        .ok_or(InputError::OutOfRange)
}

/// Parses a case-insensitive `y`/`n` answer.
pub fn parse_yes_no(token: &str) -> Result<bool, InputError> {
    if token.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(InputError::InvalidYesNo)
    }
}

/// Prompts until the user supplies a valid coordinate.
#[instrument(skip(console))]
pub fn read_coordinate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<usize, ConsoleError> {
    loop {
        console.prompt(prompt)?;
        let token = console.next_token()?;
        match parse_coordinate(&token) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(%token, error = ?e, "Coordinate rejected");
                console.say(e)?;
            }
        }
    }
}

/// Asks whether to play another round, re-prompting on bad answers.
#[instrument(skip(console))]
pub fn read_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<bool, ConsoleError> {
    console.prompt(REPLAY_PROMPT)?;
    loop {
        let token = console.next_token()?;
        match parse_yes_no(&token) {
            Ok(answer) => return Ok(answer),
            Err(e) => {
                debug!(%token, "Replay answer rejected");
                console.prompt(e)?;
            }
        }
    }
}
