//! Lexical error types.
//!
//! Every lexical error is recoverable: the scanner records it, skips the
//! offending characters and keeps going. Errors carry both the byte span
//! and the row/column of the first skipped character so they can be
//! rendered without re-scanning the source.

use tabula_diagnostic::{Diagnostic, ErrorCode};
use tabula_ir::{Position, Span};

/// A recovered lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Bytes that were skipped.
    pub span: Span,
    /// Row and column of the first skipped character.
    pub pos: Position,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unrecognized character `{}`", .ch.escape_debug())]
    InvalidChar { ch: char },
    /// A number that starts with `0` and keeps going (`007`, `0x1`).
    #[error("number `{text}` has a leading zero")]
    LeadingZero { text: String },
    /// A nonzero digit run that continues with letters (`12abc`).
    #[error("`{text}` starts with a digit but continues with letters")]
    IdentifierStartsWithDigit { text: String },
}

impl LexError {
    #[cold]
    pub fn invalid_char(span: Span, pos: Position, ch: char) -> Self {
        LexError {
            kind: LexErrorKind::InvalidChar { ch },
            span,
            pos,
        }
    }

    #[cold]
    pub fn leading_zero(span: Span, pos: Position, text: &str) -> Self {
        LexError {
            kind: LexErrorKind::LeadingZero { text: text.to_owned() },
            span,
            pos,
        }
    }

    #[cold]
    pub fn identifier_starts_with_digit(span: Span, pos: Position, text: &str) -> Self {
        LexError {
            kind: LexErrorKind::IdentifierStartsWithDigit { text: text.to_owned() },
            span,
            pos,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidChar { .. } => ErrorCode::E0001,
            LexErrorKind::LeadingZero { .. } => ErrorCode::E0002,
            LexErrorKind::IdentifierStartsWithDigit { .. } => ErrorCode::E0003,
        }
    }

    /// Render as a warning diagnostic; scanning continued past this error.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::warning(self.code())
            .with_message(self.kind.to_string())
            .with_label_at(self.span, self.pos, "skipped");
        match &self.kind {
            LexErrorKind::InvalidChar { .. } => diag,
            LexErrorKind::LeadingZero { text } => {
                let trimmed = text.trim_start_matches('0');
                if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
                    diag.with_suggestion(format!("write `{trimmed}`"))
                } else {
                    diag.with_note("a number is `0` or a digit run starting with 1-9")
                }
            }
            LexErrorKind::IdentifierStartsWithDigit { .. } => {
                diag.with_note("identifiers must start with a letter, `_` or `$`")
            }
        }
    }
}
