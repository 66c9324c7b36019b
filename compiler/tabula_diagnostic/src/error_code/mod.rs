//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexical errors (recovered, scanning continues)
/// - E1xxx: Syntax errors and grammar-table construction errors
/// - E2xxx: Semantic errors from the symbol-table builder
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Unrecognized character in source
    E0001,
    /// Number literal with a leading zero (`007`, `0x`)
    E0002,
    /// Digit run running into letters (`9x9x`)
    E0003,

    // Syntax Errors (E1xxx)
    /// Terminal on the parse stack does not match the lookahead
    E1001,
    /// No production for (nonterminal, lookahead)
    E1002,
    /// Grammar is not LL(1): two productions claim one table cell
    E1003,
    /// Malformed production right-hand side
    E1004,

    // Semantic Errors (E2xxx)
    /// Declaration does not start with an identifier
    E2001,
    /// Missing `:` between name and type
    E2002,
    /// Unknown type keyword
    E2003,
    /// Name declared twice in one scope
    E2004,
    /// Declaration not followed by `;` or end of input
    E2005,

    // Internal Errors (E9xxx)
    /// Internal invariant violated
    E9001,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unrecognized character",
            ErrorCode::E0002 => "number literal has a leading zero",
            ErrorCode::E0003 => "number literal runs into letters",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "no production for lookahead",
            ErrorCode::E1003 => "grammar is not LL(1)",
            ErrorCode::E1004 => "malformed production",
            ErrorCode::E2001 => "expected identifier",
            ErrorCode::E2002 => "expected `:`",
            ErrorCode::E2003 => "unknown type",
            ErrorCode::E2004 => "duplicate declaration",
            ErrorCode::E2005 => "expected `;` or end of input",
            ErrorCode::E9001 => "internal error",
        }
    }

    /// Check if this is a lexical error code (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a syntax or grammar error code (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is a semantic error code (E2xxx).
    pub fn is_semantic_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
        )
    }

    /// Check if this is an internal error code (E9xxx).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
