//! Low-level character access for the Tabula scanner.
//!
//! [`SourceBuffer`] owns the source text and guarantees it ends with the
//! [`END_OF_INPUT`] marker. [`Cursor`] walks that buffer one character at
//! a time, tracking row and column for diagnostics.
//!
//! This crate knows nothing about tokens; classification lives in
//! `tabula_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, EndOfInput};
pub use source_buffer::{SourceBuffer, END_OF_INPUT};

/// Letters start identifiers: ASCII letters, `_` and `$`.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

/// Decimal digits `0-9`.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Characters that may continue an identifier or a malformed number run.
#[inline]
pub fn is_alphanumeric(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// Whitespace skipped between tokens: space, tab, carriage return, newline.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
