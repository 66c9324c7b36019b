//! Reserved-word lookup.
//!
//! Keywords are not scanned on a separate path: the scanner greedily matches
//! `letter (letter | digit)*` and then asks [`lookup`] whether the text is
//! reserved. A miss means the run is an ordinary identifier.

use tabula_ir::TokenKind;

/// Look up a reserved word by exact text.
///
/// Uses length-bucketing for fast rejection: identifiers whose length falls
/// outside the 2-7 range are rejected without any comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "do" => Some(TokenKind::Do),
            _ => None,
        },
        3 => match text {
            "end" => Some(TokenKind::End),
            "ptr" => Some(TokenKind::Ptr),
            _ => None,
        },
        4 => match text {
            "then" => Some(TokenKind::Then),
            "real" => Some(TokenKind::Real),
            _ => None,
        },
        5 => match text {
            "begin" => Some(TokenKind::Begin),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        7 => match text {
            "integer" => Some(TokenKind::Integer),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
