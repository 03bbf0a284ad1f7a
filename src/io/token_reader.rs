//! Scanner-style reader over the session input stream
//!
//! Yields whole lines, whitespace-delimited tokens and y/n answers from a
//! single buffered input.
//!
//! # Design
//!
//! The reader keeps the current line in a buffer with a cursor. Tokens are
//! taken from the buffer and the next line is read only when the buffer runs
//! dry, so several tokens typed on one line are consumed one prompt at a time.
//! Reading a token consumes it: a malformed token is discarded simply by
//! having been read. Bytes that are not valid UTF-8 are decoded lossily, so
//! they reach the parsers as ordinary (malformed) tokens.
//!
//! # Resource Handling
//!
//! The reader owns its input. Dropping the reader drops the input, which is
//! how the session releases the stream on every exit path.
//!
//! ```
//! use bank_account_simulator::io::TokenReader;
//! use std::io::Cursor;
//!
//! let mut reader = TokenReader::new(Cursor::new("Alice Smith\n1 250.00\n"));
//! assert_eq!(reader.next_line().unwrap().as_deref(), Some("Alice Smith"));
//! assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
//! assert_eq!(reader.next_token().unwrap().as_deref(), Some("250.00"));
//! assert_eq!(reader.next_token().unwrap(), None);
//! ```

use std::io::{self, BufRead};
use tracing::debug;

/// Buffered line and token reader
pub struct TokenReader<R> {
    input: R,
    raw: Vec<u8>,
    buffer: String,
    cursor: usize,
    /// Whether `buffer` holds a line that has not been fully consumed
    has_line: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            raw: Vec::new(),
            buffer: String::new(),
            cursor: 0,
            has_line: false,
        }
    }

    /// Read the remainder of the current line, or the next line
    ///
    /// The line ending is stripped; everything else, including surrounding
    /// whitespace and the empty string, is returned verbatim.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the input is exhausted.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if !self.has_line && !self.read_line()? {
            return Ok(None);
        }

        let line = strip_line_ending(&self.buffer[self.cursor..]).to_string();
        self.cursor = self.buffer.len();
        self.has_line = false;

        Ok(Some(line))
    }

    /// Read the next whitespace-delimited token, crossing lines as needed
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if self.has_line {
                if let Some(token) = self.take_token() {
                    return Ok(Some(token));
                }
                self.has_line = false;
            }

            if !self.read_line()? {
                return Ok(None);
            }
        }
    }

    /// Read the answer to a yes/no question
    ///
    /// Takes the next token left on the current line. When the current line
    /// is used up, a fresh line is read and its first token returned; a blank
    /// fresh line yields an empty answer instead of waiting for more input.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the input is exhausted.
    pub fn next_answer(&mut self) -> io::Result<Option<String>> {
        if self.has_line {
            if let Some(token) = self.take_token() {
                return Ok(Some(token));
            }
            self.has_line = false;
        }

        if !self.read_line()? {
            return Ok(None);
        }

        Ok(Some(self.take_token().unwrap_or_default()))
    }

    fn read_line(&mut self) -> io::Result<bool> {
        self.raw.clear();
        self.buffer.clear();
        self.cursor = 0;
        let read = self.input.read_until(b'\n', &mut self.raw)?;
        self.buffer.push_str(&String::from_utf8_lossy(&self.raw));
        self.has_line = read > 0;
        Ok(self.has_line)
    }

    fn take_token(&mut self) -> Option<String> {
        let rest = &self.buffer[self.cursor..];
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let tail = &rest[start..];
        let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let token = tail[..len].to_string();
        self.cursor += start + len;
        Some(token)
    }
}

impl<R> Drop for TokenReader<R> {
    fn drop(&mut self) {
        debug!("input stream released");
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
