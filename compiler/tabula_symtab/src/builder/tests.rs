use pretty_assertions::assert_eq;
use tabula_ir::{Position, TokenTag};

use super::*;

fn build(source: &str) -> Result<SymbolTable, SemanticError> {
    let mut scanner = Scanner::new(source);
    SymbolTableBuilder::new(&mut scanner).build()
}

fn built(source: &str) -> SymbolTable {
    match build(source) {
        Ok(table) => table,
        Err(err) => panic!("{source:?} should build: {err}"),
    }
}

fn offsets(table: &SymbolTable) -> Vec<(&str, u32)> {
    table.iter().map(|e| (e.name.as_str(), e.offset)).collect()
}

#[test]
fn offsets_and_width() {
    let table = built("id1:real; id2:ptr integer; id3:integer;");
    assert_eq!(offsets(&table), vec![("id1", 0), ("id2", 8), ("id3", 12)]);
    assert_eq!(table.width(), Some(16));
    assert_eq!(
        table.get("id2").map(|e| &e.ty),
        Some(&TypeDesc::pointer_to(TypeDesc::INTEGER))
    );
}

#[test]
fn trailing_separator_is_optional() {
    let with = built("a:integer; b:real;");
    let without = built("a : integer ;\nb : real");
    assert_eq!(offsets(&with), vec![("a", 0), ("b", 4)]);
    assert_eq!(offsets(&with), offsets(&without));
    assert_eq!(with.width(), Some(12));
    assert_eq!(without.width(), Some(12));
}

#[test]
fn empty_input_builds_empty_table() {
    let table = built("   ");
    assert!(table.is_empty());
    assert_eq!(table.width(), Some(0));
}

#[test]
fn nested_pointer_type() {
    let table = built("p: ptr ptr real");
    let entry = table.get("p").cloned();
    assert_eq!(
        entry.map(|e| (e.ty.to_string(), e.offset)),
        Some(("pointer(pointer(real))".to_string(), 0))
    );
    assert_eq!(table.width(), Some(4));
}

#[test]
fn long_pointer_chain() {
    let source = format!("p: {} integer", "ptr ".repeat(2_000));
    let table = built(&source);
    let ty = table.get("p").map(|e| e.ty.pointer_depth());
    assert_eq!(ty, Some(2_000));
    assert_eq!(table.width(), Some(4));
}

#[test]
fn very_deep_pointer_chain_builds_and_drops() {
    let source = format!("p: {} integer; q: real", "ptr ".repeat(200_000));
    let table = built(&source);
    let entry = table.get("p").cloned();
    assert_eq!(entry.map(|e| e.ty.pointer_depth()), Some(200_000));
    assert_eq!(table.get("q").map(|e| e.offset), Some(4));
    assert_eq!(table.width(), Some(12));
    drop(table);
}

#[test]
fn missing_colon_aborts() {
    let err = build("id1 real;").err();
    let Some(SemanticError::MissingColon { name, found }) = err.clone() else {
        panic!("expected missing colon, got {err:?}");
    };
    assert_eq!(name, "id1");
    assert_eq!(found.tag(), TokenTag::KwReal);
    assert_eq!(found.pos, Position::new(1, 5));
}

#[test]
fn unknown_type_aborts() {
    let err = build("x: integer; y: bool;").err();
    let Some(SemanticError::UnknownType { found }) = err.clone() else {
        panic!("expected unknown type, got {err:?}");
    };
    assert_eq!(found.kind, TokenKind::Ident("bool".into()));
}

#[test]
fn ptr_without_pointee_is_unknown_type() {
    assert!(matches!(
        build("x: ptr"),
        Err(SemanticError::UnknownType { found }) if found.kind.is_end_marker()
    ));
}

#[test]
fn declaration_must_start_with_identifier() {
    assert!(matches!(
        build(": integer"),
        Err(SemanticError::ExpectedIdentifier { .. })
    ));
    assert!(matches!(
        build("a: real;; b: real"),
        Err(SemanticError::ExpectedIdentifier { found }) if found.tag() == TokenTag::Semicolon
    ));
}

#[test]
fn missing_separator_aborts() {
    assert!(matches!(
        build("a: real b: real"),
        Err(SemanticError::ExpectedSeparator { found }) if found.tag() == TokenTag::Ident
    ));
}

#[test]
fn duplicate_declaration_aborts() {
    let err = build("a: real; a: integer").err();
    assert!(matches!(
        err,
        Some(SemanticError::DuplicateDeclaration { ref name, .. }) if name == "a"
    ));
}

#[test]
fn lexical_errors_stay_with_the_scanner() {
    let mut scanner = Scanner::new("a: real; ? b: integer");
    let table = SymbolTableBuilder::new(&mut scanner).build();
    assert_eq!(table.map(|t| t.len()), Ok(2));
    assert_eq!(scanner.errors().len(), 1);
}
