//! Pull-based lexical scanner.
//!
//! [`Scanner::next_token`] skips whitespace, then classifies the longest
//! run starting at the cursor:
//!
//! - `letter (letter | digit)*` is an identifier, reclassified as a keyword
//!   when the text is reserved.
//! - `digit+` is a number. `0` must stand alone; a nonzero run must not run
//!   into letters.
//! - `:`, `<` and `>` look one character ahead for `:=`, `<=`, `<>`, `>=`.
//!   On no match the shorter token is produced and the following character
//!   is left for the next call.
//! - `#` is the end marker.
//!
//! Lexical errors never abort the scan. The offending characters are
//! skipped, the error is recorded, and scanning retries from the next
//! character. Once the end marker has been produced every later call
//! returns it again without touching the cursor.

use tabula_ir::{Position, Span, Token, TokenKind};
use tabula_lexer_core::{
    is_alphanumeric, is_digit, is_letter, is_whitespace, Cursor, END_OF_INPUT,
};
use tracing::{debug, trace, warn};

use crate::{keywords, LexError};

/// Scanner over one source text.
///
/// Owns its cursor exclusively; independent scanners share nothing.
#[derive(Clone, Debug)]
pub struct Scanner {
    cursor: Cursor,
    errors: Vec<LexError>,
    /// The end-marker token, once produced.
    finished: Option<Token>,
}

impl Scanner {
    /// Load `source`, appending the end marker if it is missing.
    pub fn new(source: &str) -> Self {
        Self::from_cursor(Cursor::from_source(source))
    }

    pub fn from_cursor(cursor: Cursor) -> Self {
        Scanner {
            cursor,
            errors: Vec::new(),
            finished: None,
        }
    }

    /// Produce the next token.
    ///
    /// Always succeeds: lexical errors are recorded in [`errors`](Self::errors)
    /// and skipped over.
    pub fn next_token(&mut self) -> Token {
        if let Some(end) = &self.finished {
            return end.clone();
        }
        loop {
            self.cursor.eat_while(is_whitespace);
            match self.scan() {
                Ok(token) => {
                    trace!(kind = ?token.kind, pos = %token.pos, "token");
                    if token.kind.is_end_marker() {
                        self.finish(&token);
                    }
                    return token;
                }
                Err(err) => {
                    warn!(code = %err.code(), %err, "lexical error, skipping");
                    self.errors.push(err);
                }
            }
        }
    }

    /// Lexical errors recorded so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Take the recorded lexical errors, leaving none behind.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Returns `true` once the end marker has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Byte offset of the underlying cursor.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// The end-marked source being scanned.
    pub fn source(&self) -> &str {
        self.cursor.source()
    }

    fn finish(&mut self, end: &Token) {
        let ignored = self.cursor.remaining();
        if ignored > 0 {
            debug!(ignored, pos = %end.pos, "end marker before end of source");
        }
        self.finished = Some(end.clone());
    }

    /// Scan one token starting at the cursor, or the error that spans the
    /// skipped characters.
    fn scan(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        let (row, col) = self.cursor.next_location();
        let pos = Position::new(row, col);

        // The buffer always ends with the marker, so running out here only
        // happens on a cursor built by hand.
        let Ok(first) = self.cursor.advance() else {
            return Ok(Token::new(TokenKind::EndMarker, self.span_from(start), pos));
        };

        let kind = match first {
            END_OF_INPUT => TokenKind::EndMarker,
            '0' => self.zero(start, pos)?,
            c if is_digit(c) => self.number(start, pos)?,
            c if is_letter(c) => self.identifier(start),
            ':' => {
                if self.cursor.eat_if('=') {
                    TokenKind::Assign
                } else {
                    TokenKind::Colon
                }
            }
            '<' => {
                if self.cursor.eat_if('=') {
                    TokenKind::LessEqual
                } else if self.cursor.eat_if('>') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.cursor.eat_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Equal,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            other => return Err(LexError::invalid_char(self.span_from(start), pos, other)),
        };
        Ok(Token::new(kind, self.span_from(start), pos))
    }

    /// `0` stands alone; anything alphanumeric after it is skipped with it.
    fn zero(&mut self, start: usize, pos: Position) -> Result<TokenKind, LexError> {
        if is_alphanumeric(self.cursor.peek()) {
            self.cursor.eat_while(is_alphanumeric);
            return Err(LexError::leading_zero(
                self.span_from(start),
                pos,
                self.cursor.slice_from(start),
            ));
        }
        Ok(TokenKind::Num("0".into()))
    }

    fn number(&mut self, start: usize, pos: Position) -> Result<TokenKind, LexError> {
        self.cursor.eat_while(is_digit);
        if is_letter(self.cursor.peek()) {
            self.cursor.eat_while(is_alphanumeric);
            return Err(LexError::identifier_starts_with_digit(
                self.span_from(start),
                pos,
                self.cursor.slice_from(start),
            ));
        }
        Ok(TokenKind::Num(self.cursor.slice_from(start).into()))
    }

    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_alphanumeric);
        let text = self.cursor.slice_from(start);
        keywords::lookup(text).unwrap_or_else(|| TokenKind::Ident(text.into()))
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_range_saturating(start..self.cursor.pos())
    }
}
