//! Syntax and grammar-construction errors.

use tabula_diagnostic::{Diagnostic, ErrorCode};
use tabula_ir::{Position, Span, Token, TokenTag};

use crate::{GrammarSymbol, NonTerminal, Production};

/// A syntax error found while driving the parse stack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The terminal on top of the stack differs from the lookahead.
    #[error("expected `{expected}`, found {}", .found.kind)]
    UnexpectedToken {
        expected: GrammarSymbol,
        found: Token,
    },
    /// The table has no production for the nonterminal on the lookahead.
    #[error("no production for `{nonterminal}` on {}", .found.kind)]
    NoProduction {
        nonterminal: NonTerminal,
        found: Token,
    },
}

impl SyntaxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::UnexpectedToken { .. } => ErrorCode::E1001,
            SyntaxError::NoProduction { .. } => ErrorCode::E1002,
        }
    }

    /// The stack symbol that could not be satisfied.
    pub fn symbol(&self) -> GrammarSymbol {
        match self {
            SyntaxError::UnexpectedToken { expected, .. } => *expected,
            SyntaxError::NoProduction { nonterminal, .. } => GrammarSymbol::NonTerminal(*nonterminal),
        }
    }

    /// The lookahead token at the point of failure.
    pub fn found(&self) -> &Token {
        match self {
            SyntaxError::UnexpectedToken { found, .. } | SyntaxError::NoProduction { found, .. } => {
                found
            }
        }
    }

    pub fn span(&self) -> Span {
        self.found().span
    }

    pub fn pos(&self) -> Position {
        self.found().pos
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let found = self.found();
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label_at(found.span, found.pos, format!("unexpected {}", found.kind));
        match self {
            SyntaxError::UnexpectedToken { expected, .. } if expected.as_tag() == Some(TokenTag::EndMarker) => {
                diag.with_note("input continues after a complete expression")
            }
            SyntaxError::UnexpectedToken { .. } => diag,
            SyntaxError::NoProduction { nonterminal, .. } => {
                diag.with_note(format!("`{nonterminal}` cannot start with {}", found.kind))
            }
        }
    }
}

/// A grammar that cannot drive a predictive parser.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("malformed production `{production}`: {reason}")]
    MalformedProduction {
        production: Production,
        reason: &'static str,
    },
    /// Two productions claim the same table cell.
    #[error("grammar is not LL(1): `{first}` and `{second}` both apply to ({nonterminal}, {terminal})")]
    Conflict {
        nonterminal: NonTerminal,
        terminal: TokenTag,
        first: Production,
        second: Production,
    },
}

impl GrammarError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GrammarError::MalformedProduction { .. } => ErrorCode::E1004,
            GrammarError::Conflict { .. } => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

#[cfg(test)]
mod tests;
