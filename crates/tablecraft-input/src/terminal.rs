//! Line-oriented terminal I/O.
//!
//! The session only needs two things from a terminal: write some text, and
//! read one line back. [`StreamTerminal`] provides that over any pair of byte
//! streams (stdin/stdout included); [`MockTerminal`] replays scripted answers
//! and records everything written, for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Abstraction over terminal I/O for testability.
pub trait Terminal {
    /// Write `text` as-is and flush it, so prompts appear before reading.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read one line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// A terminal over arbitrary input and output streams.
#[derive(Debug)]
pub struct StreamTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl StreamTerminal<StdinLock<'static>, Stdout> {
    /// The process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for StreamTerminal<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches('\n').trim_end_matches('\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Mock terminal for testing sessions.
///
/// Answers are handed out in order; once they run out every read reports end
/// of input.
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    responses: VecDeque<String>,
    output: String,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Create a mock that is already at end of input (Ctrl+D).
    pub fn eof() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Terminal for MockTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.responses.pop_front())
    }
}
