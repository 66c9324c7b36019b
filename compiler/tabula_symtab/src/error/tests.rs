use pretty_assertions::assert_eq;
use tabula_ir::TokenKind;

use super::*;

fn token(kind: TokenKind, start: u32, col: u32) -> Token {
    let len = u32::try_from(kind.lexeme().map_or(1, str::len)).unwrap_or(1);
    Token::new(kind, Span::new(start, start + len), Position::new(1, col))
}

#[test]
fn codes() {
    let found = Token::dummy(TokenKind::Semicolon);
    assert_eq!(
        SemanticError::ExpectedIdentifier {
            found: found.clone()
        }
        .code(),
        ErrorCode::E2001
    );
    assert_eq!(
        SemanticError::MissingColon {
            name: "x".into(),
            found: found.clone()
        }
        .code(),
        ErrorCode::E2002
    );
    assert_eq!(
        SemanticError::UnknownType {
            found: found.clone()
        }
        .code(),
        ErrorCode::E2003
    );
    assert_eq!(
        SemanticError::ExpectedSeparator { found }.code(),
        ErrorCode::E2005
    );
    assert_eq!(SemanticError::ScopeUnderflow.code(), ErrorCode::E9001);
}

#[test]
fn missing_colon_message() {
    let err = SemanticError::MissingColon {
        name: "id1".into(),
        found: token(TokenKind::Real, 4, 5),
    };
    assert_eq!(err.to_string(), "expected `:` after `id1`, found `real`");
    assert_eq!(err.location().map(|(_, pos)| pos), Some(Position::new(1, 5)));
}

#[test]
fn duplicate_diagnostic_points_at_both_declarations() {
    let err = SemanticError::DuplicateDeclaration {
        name: "a".into(),
        span: Span::new(12, 13),
        pos: Position::new(1, 13),
        previous: Span::new(0, 1),
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2004);
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(12, 13)));
}

#[test]
fn internal_error_has_no_label() {
    let diag = SemanticError::ScopeUnderflow.to_diagnostic();
    assert!(diag.labels.is_empty());
    assert_eq!(diag.code, ErrorCode::E9001);
}

#[test]
fn unknown_type_gets_a_note() {
    let err = SemanticError::UnknownType {
        found: token(TokenKind::Ident("bool".into()), 4, 5),
    };
    assert_eq!(
        err.to_string(),
        "expected a type (`integer`, `real` or `ptr`), found identifier `bool`"
    );
    assert_eq!(err.to_diagnostic().notes.len(), 1);
}
