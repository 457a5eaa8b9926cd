//! Space-delimited command line builder.

use std::fmt::{self, Write};

use crate::error::WireResult;
use crate::escape::SEPARATOR;
use crate::number::write_number;
use crate::value::Value;

/// Builds one wire command from already-formatted tokens.
///
/// A separator precedes every token except the first, even an empty one.
/// Tokens are written as given; escaping is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    buf: String,
    tokens: usize,
}

impl Line {
    /// Creates an empty line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: String::new(),
            tokens: 0,
        }
    }

    /// Creates an empty line with `capacity` bytes preallocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            tokens: 0,
        }
    }

    /// Appends a token.
    pub fn push(&mut self, token: &str) {
        self.separate();
        self.buf.push_str(token);
    }

    /// Appends the `Display` form of `token`.
    pub fn push_display(&mut self, token: impl fmt::Display) {
        self.separate();
        let _ = write!(self.buf, "{token}");
    }

    /// Appends a fixed-point number token.
    pub fn push_number(&mut self, value: f64) -> WireResult<()> {
        let mark = self.mark();
        self.separate();
        write_number(&mut self.buf, value).map_err(|err| {
            self.rewind(mark);
            err
        })
    }

    /// Appends the token for `value`.
    pub fn push_value(&mut self, value: &Value) -> WireResult<()> {
        let mark = self.mark();
        self.separate();
        value.write_token(&mut self.buf).map_err(|err| {
            self.rewind(mark);
            err
        })
    }

    /// Number of tokens written so far.
    #[must_use]
    pub const fn token_count(&self) -> usize {
        self.tokens
    }

    /// Returns `true` if no token has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens == 0
    }

    /// Returns the line built so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the builder and returns the line.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }

    fn separate(&mut self) {
        if self.tokens > 0 {
            self.buf.push(SEPARATOR);
        }
        self.tokens += 1;
    }

    const fn mark(&self) -> (usize, usize) {
        (self.buf.len(), self.tokens)
    }

    fn rewind(&mut self, (len, tokens): (usize, usize)) {
        self.buf.truncate(len);
        self.tokens = tokens;
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Joins tokens with single spaces, preserving order.
pub fn join<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut line = Line::new();
    for token in tokens {
        line.push(token.as_ref());
    }
    line.finish()
}
