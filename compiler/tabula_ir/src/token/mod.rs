//! Token types shared by the scanner and both of its consumers.

mod kind;
mod tag;

pub use kind::TokenKind;
pub use tag::TokenTag;

use std::fmt;

use super::{Position, Span};

/// A token with its location in the source.
///
/// Tokens are immutable once produced. `span` covers the matched bytes;
/// `pos` is the row/column of the first matched character.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, pos: Position) -> Self {
        Token { kind, span, pos }
    }

    /// Create a token with no source location, for tests and synthesized input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
            pos: Position::START,
        }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} ({})", self.kind, self.pos, self.span)
    }
}
