//! Interactive game session: turn management and the round loop.
//!
//! A session owns one board, two players, and the console. It runs
//! rounds until the user declines to play again.

pub mod input;

use crate::console::{Console, ConsoleError};
use crate::games::tictactoe::{Board, GameStatus, Mark, Move, MoveError, Player, Seat};
use derive_getters::Getters;
use input::{COLUMN_PROMPT, ROW_PROMPT, read_coordinate, read_yes_no};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Printed once when the session starts.
pub const BANNER: &str = "TicTacToe game started!";
/// Printed once when the session ends.
pub const FAREWELL: &str = "Thanks for playing!";
/// Printed when a round ends with a full board and no line.
pub const DRAW_MESSAGE: &str = "It's a draw!";

/// Where the session is in its round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the current player's coordinates.
    AwaitingMove,
    /// A player completed a line.
    RoundWon(Mark),
    /// The board filled with no line.
    RoundDrawn,
    /// Asking whether to play another round.
    PromptReplay,
    /// The user declined another round.
    SessionEnded,
}

/// A console session of one or more rounds between two players.
#[derive(Debug, Getters)]
pub struct GameSession<R: BufRead, W: Write> {
    /// The board, cleared at the start of every round.
    board: Board,
    /// Current state of the round loop.
    state: SessionState,
    #[getter(skip)]
    round: u32,
    #[getter(skip)]
    players: [Player; 2],
    #[getter(skip)]
    current: Seat,
    #[getter(skip)]
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session with X seated first and O second.
    #[instrument(skip(console))]
    pub fn new(console: Console<R, W>) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            state: SessionState::AwaitingMove,
            round: 1,
            players: [Player::new(Mark::X), Player::new(Mark::O)],
            current: Seat::First,
            console,
        }
    }

    /// Runs rounds until the user declines to continue.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!("Session started");
        self.console.say(BANNER)?;

        while self.state != SessionState::SessionEnded {
            self.step()?;
        }

        info!(rounds = self.round, "Session ended");
        Ok(())
    }

    /// Performs one state transition and returns the new state.
    #[instrument(skip(self), fields(round = self.round, state = ?self.state))]
    pub fn step(&mut self) -> Result<SessionState, ConsoleError> {
        let next = match self.state {
            SessionState::AwaitingMove => self.play_turn()?,
            SessionState::RoundWon(mark) => {
                self.console.say(format!("Player {mark} wins!"))?;
                self.console.say(self.board.render())?;
                SessionState::PromptReplay
            }
            SessionState::RoundDrawn => {
                self.console.say(DRAW_MESSAGE)?;
                self.console.say(self.board.render())?;
                SessionState::PromptReplay
            }
            SessionState::PromptReplay => {
                if read_yes_no(&mut self.console)? {
                    self.reset_round();
                    SessionState::AwaitingMove
                } else {
                    self.finish()?;
                    SessionState::SessionEnded
                }
            }
            SessionState::SessionEnded => SessionState::SessionEnded,
        };

        debug!(from = ?self.state, to = ?next, "Transition");
        self.state = next;
        Ok(next)
    }

    /// Prompts for one move and applies it.
    fn play_turn(&mut self) -> Result<SessionState, ConsoleError> {
        let mark = self.current_player().mark();

        self.console.blank_line()?;
        self.console.say("Current board state:")?;
        self.console.say(self.board.render())?;
        self.console.blank_line()?;
        self.console.say(format!("Player {mark}, enter your move:"))?;

        let row = read_coordinate(&mut self.console, ROW_PROMPT)?;
        let col = read_coordinate(&mut self.console, COLUMN_PROMPT)?;

        let status = match self.make_move(row, col) {
            Ok(status) => {
                self.console.say(Move::new(mark, row, col))?;
                status
            }
            Err(e) => {
                self.console.say(e)?;
                self.console.say("Current board state:")?;
                self.console.say(self.board.render())?;
                return Ok(SessionState::AwaitingMove);
            }
        };

        self.console.say("Current board state:")?;
        self.console.say(self.board.render())?;

        Ok(match status {
            GameStatus::Won(winner) => SessionState::RoundWon(winner),
            GameStatus::Draw => SessionState::RoundDrawn,
            GameStatus::InProgress => {
                let next = self.switch_current_player();
                let mark = self.player(next).mark();
                self.console.say(format!("It's now Player {mark}'s turn."))?;
                SessionState::AwaitingMove
            }
        })
    }

    /// Places the current player's marker at `(row, col)`.
    ///
    /// Rejected moves leave the board and turn unchanged. The turn is not
    /// switched here; a successful non-terminal move is followed by
    /// [`GameSession::switch_current_player`].
    #[instrument(skip(self), fields(round = self.round))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let action = Move::new(self.current_player().mark(), row, col);
        if let Err(e) = action.validate(&self.board) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        self.board.place(row, col, action.mark);
        info!(%action, "Move applied");

        // Win takes priority over a full board.
        let status = if self.has_winner() {
            GameStatus::Won(action.mark)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        debug!(?status, "Round status");
        Ok(status)
    }

    /// Hands the turn to the other player and returns the new seat.
    pub fn switch_current_player(&mut self) -> Seat {
        self.current = self.current.other();
        self.current
    }

    /// Returns true when the current player owns a complete line.
    pub fn has_winner(&self) -> bool {
        self.board.has_line(self.current_player().mark())
    }

    /// Clears the board and gives the first player the turn.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.current = Seat::First;
        self.round += 1;
        info!(round = self.round, "New round");
    }

    /// Returns the one-based number of the round in play.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the seat holding the turn.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Returns the player holding the turn.
    pub fn current_player(&self) -> Player {
        self.player(self.current)
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> Player {
        self.players[seat.index()]
    }

    /// Returns the session console.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    fn finish(&mut self) -> Result<(), ConsoleError> {
        self.console.close();
        self.console.say(FAREWELL)
    }
}
