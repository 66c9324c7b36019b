//! Compact discriminant tag for `TokenKind`.

use std::fmt;

/// Fieldless discriminant of [`TokenKind`](super::TokenKind).
///
/// Grammar symbols and parse-table keys are built from tags, never from
/// full tokens, so a terminal compares equal regardless of its lexeme.
///
/// | Range | Category   |
/// |-------|------------|
/// | 0     | End marker |
/// | 1-9   | Keywords   |
/// | 10-11 | Literals   |
/// | 12-26 | Operators and delimiters |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenTag {
    EndMarker = 0,

    // === Keywords ===
    KwBegin = 1,
    KwIf = 2,
    KwThen = 3,
    KwWhile = 4,
    KwDo = 5,
    KwEnd = 6,
    KwInteger = 7,
    KwReal = 8,
    KwPtr = 9,

    // === Literals ===
    Ident = 10,
    Num = 11,

    // === Operators and delimiters ===
    Plus = 12,
    Minus = 13,
    Star = 14,
    Slash = 15,
    Colon = 16,
    Assign = 17,
    Less = 18,
    NotEqual = 19,
    LessEqual = 20,
    Greater = 21,
    GreaterEqual = 22,
    Equal = 23,
    Semicolon = 24,
    LParen = 25,
    RParen = 26,
}

impl TokenTag {
    /// Every tag, in discriminant order.
    pub const ALL: [TokenTag; 27] = [
        TokenTag::EndMarker,
        TokenTag::KwBegin,
        TokenTag::KwIf,
        TokenTag::KwThen,
        TokenTag::KwWhile,
        TokenTag::KwDo,
        TokenTag::KwEnd,
        TokenTag::KwInteger,
        TokenTag::KwReal,
        TokenTag::KwPtr,
        TokenTag::Ident,
        TokenTag::Num,
        TokenTag::Plus,
        TokenTag::Minus,
        TokenTag::Star,
        TokenTag::Slash,
        TokenTag::Colon,
        TokenTag::Assign,
        TokenTag::Less,
        TokenTag::NotEqual,
        TokenTag::LessEqual,
        TokenTag::Greater,
        TokenTag::GreaterEqual,
        TokenTag::Equal,
        TokenTag::Semicolon,
        TokenTag::LParen,
        TokenTag::RParen,
    ];

    /// Surface spelling used in grammars and diagnostics.
    ///
    /// Identifiers and numbers have no fixed spelling and render as the
    /// grammar names `id` and `num`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::EndMarker => "#",
            TokenTag::KwBegin => "begin",
            TokenTag::KwIf => "if",
            TokenTag::KwThen => "then",
            TokenTag::KwWhile => "while",
            TokenTag::KwDo => "do",
            TokenTag::KwEnd => "end",
            TokenTag::KwInteger => "integer",
            TokenTag::KwReal => "real",
            TokenTag::KwPtr => "ptr",
            TokenTag::Ident => "id",
            TokenTag::Num => "num",
            TokenTag::Plus => "+",
            TokenTag::Minus => "-",
            TokenTag::Star => "*",
            TokenTag::Slash => "/",
            TokenTag::Colon => ":",
            TokenTag::Assign => ":=",
            TokenTag::Less => "<",
            TokenTag::NotEqual => "<>",
            TokenTag::LessEqual => "<=",
            TokenTag::Greater => ">",
            TokenTag::GreaterEqual => ">=",
            TokenTag::Equal => "=",
            TokenTag::Semicolon => ";",
            TokenTag::LParen => "(",
            TokenTag::RParen => ")",
        }
    }

    /// Returns `true` for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 1..=9)
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
