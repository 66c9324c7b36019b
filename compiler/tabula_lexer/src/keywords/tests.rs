use pretty_assertions::assert_eq;
use tabula_ir::TokenTag;

use super::*;

#[test]
fn statement_keywords() {
    assert_eq!(lookup("begin"), Some(TokenKind::Begin));
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("then"), Some(TokenKind::Then));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("do"), Some(TokenKind::Do));
    assert_eq!(lookup("end"), Some(TokenKind::End));
}

#[test]
fn type_keywords() {
    assert_eq!(lookup("integer"), Some(TokenKind::Integer));
    assert_eq!(lookup("real"), Some(TokenKind::Real));
    assert_eq!(lookup("ptr"), Some(TokenKind::Ptr));
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert_eq!(lookup("ifx"), None);
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("BEGIN"), None);
    assert_eq!(lookup("integers"), None);
    assert_eq!(lookup("i"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn every_keyword_tag_has_a_spelling_that_resolves() {
    for tag in TokenTag::ALL.into_iter().filter(|t| t.is_keyword()) {
        let kind = lookup(tag.name());
        assert_eq!(kind.map(|k| k.tag()), Some(tag), "keyword {tag} did not resolve");
    }
}
