//! Semantic errors from the declaration pass.
//!
//! Every variant except [`SemanticError::ScopeUnderflow`] aborts the pass at
//! the first malformed declaration; no partial table is returned.

use tabula_diagnostic::{Diagnostic, ErrorCode};
use tabula_ir::{Position, Span, Token};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    #[error("expected identifier to start a declaration, found {}", .found.kind)]
    ExpectedIdentifier { found: Token },

    #[error("expected `:` after `{name}`, found {}", .found.kind)]
    MissingColon { name: String, found: Token },

    #[error("expected a type (`integer`, `real` or `ptr`), found {}", .found.kind)]
    UnknownType { found: Token },

    #[error("expected `;` or end of input after declaration, found {}", .found.kind)]
    ExpectedSeparator { found: Token },

    #[error("`{name}` is already declared in this scope")]
    DuplicateDeclaration {
        name: String,
        span: Span,
        pos: Position,
        /// Where the first declaration was.
        previous: Span,
    },

    /// A scope was closed, or a name entered, with no scope open.
    #[error("no open declaration scope")]
    ScopeUnderflow,
}

impl SemanticError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticError::ExpectedIdentifier { .. } => ErrorCode::E2001,
            SemanticError::MissingColon { .. } => ErrorCode::E2002,
            SemanticError::UnknownType { .. } => ErrorCode::E2003,
            SemanticError::DuplicateDeclaration { .. } => ErrorCode::E2004,
            SemanticError::ExpectedSeparator { .. } => ErrorCode::E2005,
            SemanticError::ScopeUnderflow => ErrorCode::E9001,
        }
    }

    /// Offending location, absent for internal errors.
    pub fn location(&self) -> Option<(Span, Position)> {
        match self {
            SemanticError::ExpectedIdentifier { found }
            | SemanticError::MissingColon { found, .. }
            | SemanticError::UnknownType { found }
            | SemanticError::ExpectedSeparator { found } => Some((found.span, found.pos)),
            SemanticError::DuplicateDeclaration { span, pos, .. } => Some((*span, *pos)),
            SemanticError::ScopeUnderflow => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some((span, pos)) = self.location() {
            diag = diag.with_label_at(span, pos, "here");
        }
        match self {
            SemanticError::DuplicateDeclaration { previous, .. } => {
                diag.with_secondary_label(*previous, "first declared here")
            }
            SemanticError::UnknownType { .. } => {
                diag.with_note("types are `integer`, `real`, or `ptr` followed by a type")
            }
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests;
