//! Token kind: the tag plus the matched text for identifiers and numbers.

use std::fmt;

use super::TokenTag;

/// Token kind with the lexeme carried only where it varies.
///
/// Identity is structural: two identifiers are equal when their text is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `#`, the designated end-of-input marker.
    EndMarker,

    // Keywords
    Begin,
    If,
    Then,
    While,
    Do,
    End,
    Integer,
    Real,
    Ptr,

    // Literals
    Ident(Box<str>),
    Num(Box<str>),

    // Operators and delimiters
    Plus,
    Minus,
    Star,
    Slash,
    Colon,
    Assign,
    Less,
    NotEqual,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    Semicolon,
    LParen,
    RParen,
}

impl TokenKind {
    /// Discriminant tag of this kind.
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::EndMarker => TokenTag::EndMarker,
            TokenKind::Begin => TokenTag::KwBegin,
            TokenKind::If => TokenTag::KwIf,
            TokenKind::Then => TokenTag::KwThen,
            TokenKind::While => TokenTag::KwWhile,
            TokenKind::Do => TokenTag::KwDo,
            TokenKind::End => TokenTag::KwEnd,
            TokenKind::Integer => TokenTag::KwInteger,
            TokenKind::Real => TokenTag::KwReal,
            TokenKind::Ptr => TokenTag::KwPtr,
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Num(_) => TokenTag::Num,
            TokenKind::Plus => TokenTag::Plus,
            TokenKind::Minus => TokenTag::Minus,
            TokenKind::Star => TokenTag::Star,
            TokenKind::Slash => TokenTag::Slash,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Assign => TokenTag::Assign,
            TokenKind::Less => TokenTag::Less,
            TokenKind::NotEqual => TokenTag::NotEqual,
            TokenKind::LessEqual => TokenTag::LessEqual,
            TokenKind::Greater => TokenTag::Greater,
            TokenKind::GreaterEqual => TokenTag::GreaterEqual,
            TokenKind::Equal => TokenTag::Equal,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
        }
    }

    /// Matched text for identifiers and numbers, `None` for fixed tokens.
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(text) | TokenKind::Num(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for the end-of-input marker.
    #[inline]
    pub fn is_end_marker(&self) -> bool {
        matches!(self, TokenKind::EndMarker)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(text) => write!(f, "identifier `{text}`"),
            TokenKind::Num(text) => write!(f, "number `{text}`"),
            TokenKind::EndMarker => f.write_str("end of input `#`"),
            other => write!(f, "`{}`", other.tag()),
        }
    }
}
