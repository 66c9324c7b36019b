use pretty_assertions::assert_eq;
use tabula_diagnostic::Severity;
use tabula_ir::TokenKind;

use super::*;

fn plus_at(col: u32) -> Token {
    Token::new(
        TokenKind::Plus,
        Span::new(col - 1, col),
        Position::new(1, col),
    )
}

#[test]
fn no_production_reports_symbol_and_token() {
    let err = SyntaxError::NoProduction {
        nonterminal: NonTerminal::T,
        found: plus_at(5),
    };
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.symbol(), GrammarSymbol::NonTerminal(NonTerminal::T));
    assert_eq!(err.pos(), Position::new(1, 5));
    assert_eq!(err.to_string(), "no production for `T` on `+`");
}

#[test]
fn unexpected_token_message() {
    let err = SyntaxError::UnexpectedToken {
        expected: GrammarSymbol::Terminal(TokenTag::RParen),
        found: Token::dummy(TokenKind::EndMarker),
    };
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.to_string(), "expected `)`, found end of input `#`");
}

#[test]
fn syntax_diagnostic_has_primary_label() {
    let err = SyntaxError::NoProduction {
        nonterminal: NonTerminal::F,
        found: plus_at(7),
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.primary_span(), Some(Span::new(6, 7)));
    assert_eq!(diag.primary_pos(), Some(Position::new(1, 7)));
    assert_eq!(diag.notes, vec!["`F` cannot start with `+`".to_string()]);
}

#[test]
fn trailing_input_gets_a_note() {
    let err = SyntaxError::UnexpectedToken {
        expected: GrammarSymbol::EndMarker,
        found: plus_at(3),
    };
    assert_eq!(err.to_diagnostic().notes.len(), 1);
}

#[test]
fn grammar_error_codes() {
    let p = Production::epsilon(NonTerminal::E2);
    let conflict = GrammarError::Conflict {
        nonterminal: NonTerminal::E2,
        terminal: TokenTag::Plus,
        first: p.clone(),
        second: p.clone(),
    };
    assert_eq!(conflict.code(), ErrorCode::E1003);
    assert_eq!(
        conflict.to_string(),
        "grammar is not LL(1): `E2 -> ε` and `E2 -> ε` both apply to (E2, +)"
    );
    let malformed = GrammarError::MalformedProduction {
        production: p,
        reason: "r",
    };
    assert_eq!(malformed.to_diagnostic().code, ErrorCode::E1004);
}
