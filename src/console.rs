//! Token-oriented text console over any reader/writer pair.
//!
//! Input is consumed as whitespace-delimited tokens so several answers may
//! share a line. The console owns both streams for the life of a session.

use derive_more::{Display, Error};
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, trace};

/// Line-based console exclusively owned by a game session.
pub struct Console<R: BufRead, W: Write> {
    input: Option<R>,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Acquires the input and output streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Some(input),
            output,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next whitespace-delimited token, blocking for input.
    #[instrument(skip(self))]
    pub fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, "Token read");
                return Ok(token);
            }

            let input = self
                .input
                .as_mut()
                .ok_or_else(|| ConsoleError::new("Console input is closed"))?;

            // Undecodable bytes become U+FFFD so they reach validation as a bad token.
            let mut line = Vec::new();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Err(ConsoleError::new("Input ended before the session finished"));
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }

    /// Writes a full line.
    pub fn say(&mut self, message: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Writes a prompt without a line break and flushes it.
    pub fn prompt(&mut self, message: impl fmt::Display) -> Result<(), ConsoleError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Releases the input stream and flushes output.
    ///
    /// Safe to call repeatedly; returns true only on the call that
    /// actually released the input.
    #[instrument(skip(self))]
    pub fn close(&mut self) -> bool {
        self.pending.clear();
        let released = self.input.take().is_some();
        if let Err(e) = self.output.flush() {
            debug!(error = %e, "Flush on close failed");
        }
        if released {
            debug!("Console input released");
        }
        released
    }

    /// Returns true once the input has been released.
    pub fn is_closed(&self) -> bool {
        self.input.is_none()
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Drop for Console<R, W> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<R: BufRead, W: Write> fmt::Debug for Console<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("closed", &self.is_closed())
            .field("pending", &self.pending)
            .finish()
    }
}

/// Console error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
