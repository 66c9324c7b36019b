//! Character cursor over an end-marked [`SourceBuffer`].
//!
//! The cursor hands out one `char` at a time. Position only moves forward.
//! After each [`advance`](Cursor::advance), `row` and `col` describe the
//! character just returned: a newline bumps `row` and resets `col` to zero,
//! anything else bumps `col`. Before the first advance the cursor sits at
//! row 1, column 0.
//!
//! # End of input
//!
//! [`peek`](Cursor::peek) past the end yields the [`END_OF_INPUT`] sentinel
//! rather than failing. [`advance`](Cursor::advance) past the end is the one
//! fallible operation and reports [`EndOfInput`].

use crate::{SourceBuffer, END_OF_INPUT};

/// Returned by [`Cursor::advance`] when no characters remain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cursor advanced past end of input at byte {pos}")]
pub struct EndOfInput {
    /// Byte offset the cursor was parked at.
    pub pos: usize,
}

/// Forward-only cursor that owns its source buffer.
#[derive(Clone, Debug)]
pub struct Cursor {
    buf: SourceBuffer,
    /// Byte offset of the next character to return.
    pos: usize,
    row: u32,
    col: u32,
}

impl Cursor {
    /// Create a cursor at byte 0 of `buf`.
    pub fn new(buf: SourceBuffer) -> Self {
        Cursor {
            buf,
            pos: 0,
            row: 1,
            col: 0,
        }
    }

    /// Load `source` (appending the end marker if needed) and start a cursor.
    pub fn from_source(source: &str) -> Self {
        Self::new(SourceBuffer::new(source))
    }

    /// Returns the character at the current position without advancing.
    ///
    /// Returns [`END_OF_INPUT`] once the cursor is past the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or(END_OF_INPUT)
    }

    /// Return the current character and move past it.
    #[inline]
    pub fn advance(&mut self) -> Result<char, EndOfInput> {
        if self.at_end() {
            return Err(EndOfInput { pos: self.pos });
        }
        Ok(self.bump())
    }

    /// Returns `true` once every character has been returned.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte offset of the next character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Row of the character last returned (1-based).
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column of the character last returned; 0 at the start of a row.
    #[inline]
    pub fn col(&self) -> u32 {
        self.col
    }

    /// `(row, col)` the next character will occupy once returned.
    ///
    /// Used by the scanner to stamp a token with the location of its first
    /// character before consuming it.
    #[inline]
    pub fn next_location(&self) -> (u32, u32) {
        (self.row, self.col.saturating_add(1))
    }

    /// Consume the current character if it equals `expected`.
    ///
    /// Never consumes past the end, so a two-character operator probe cannot
    /// swallow the character that starts the next token.
    #[inline]
    pub fn eat_if(&mut self, expected: char) -> bool {
        if !self.at_end() && self.peek() == expected {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while !self.at_end() && pred(self.peek()) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Extract the source text between two byte offsets.
    ///
    /// Offsets must come from [`pos`](Self::pos), which always sits on a
    /// character boundary.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        self.buf.as_str().get(start..end).unwrap_or("")
    }

    /// Extract the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        self.slice(start, self.pos)
    }

    /// The whole buffer, including the trailing marker.
    pub fn source(&self) -> &str {
        self.buf.as_str()
    }

    /// Bytes not yet returned.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    #[inline]
    fn rest(&self) -> &str {
        self.buf.as_str().get(self.pos..).unwrap_or("")
    }

    /// Move past the current character and update row/column.
    ///
    /// Callers guarantee `!self.at_end()`.
    #[inline]
    fn bump(&mut self) -> char {
        debug_assert!(!self.at_end(), "bump past end of input");
        let ch = self.peek();
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.row = self.row.saturating_add(1);
            self.col = 0;
        } else {
            self.col = self.col.saturating_add(1);
        }
        ch
    }
}
