use pretty_assertions::assert_eq;

use super::*;

fn enter(stack: &mut ScopeStack, name: &str, ty: TypeDesc) -> Result<u32, SemanticError> {
    stack.enter(name, ty, Span::DUMMY, Position::START)
}

#[test]
fn offsets_advance_by_width() {
    let mut stack = ScopeStack::new();
    stack.push_scope();
    assert_eq!(enter(&mut stack, "a", TypeDesc::REAL), Ok(0));
    assert_eq!(
        enter(&mut stack, "b", TypeDesc::pointer_to(TypeDesc::REAL)),
        Ok(8)
    );
    assert_eq!(enter(&mut stack, "c", TypeDesc::INTEGER), Ok(12));
    assert_eq!(stack.current().map(|s| s.offset), Some(16));

    let table = stack.pop_scope();
    assert_eq!(table.as_ref().map(SymbolTable::width), Ok(Some(16)));
    assert!(stack.is_empty());
}

#[test]
fn nested_scopes_keep_separate_offsets() {
    let mut stack = ScopeStack::new();
    stack.push_scope();
    assert_eq!(enter(&mut stack, "outer", TypeDesc::REAL), Ok(0));

    stack.push_scope();
    assert_eq!(stack.depth(), 2);
    assert_eq!(enter(&mut stack, "inner", TypeDesc::INTEGER), Ok(0));
    // Shadowing across scopes is fine.
    assert_eq!(enter(&mut stack, "outer", TypeDesc::INTEGER), Ok(4));
    let inner = stack.pop_scope().unwrap_or_default();
    assert_eq!(inner.width(), Some(8));
    assert_eq!(inner.len(), 2);

    assert_eq!(enter(&mut stack, "next", TypeDesc::INTEGER), Ok(8));
    let outer = stack.pop_scope().unwrap_or_default();
    assert_eq!(outer.width(), Some(12));
    assert_eq!(outer.get("inner"), None);
}

#[test]
fn empty_scope_has_zero_width() {
    let mut stack = ScopeStack::new();
    stack.push_scope();
    let table = stack.pop_scope().unwrap_or_default();
    assert!(table.is_empty());
    assert_eq!(table.width(), Some(0));
}

#[test]
fn duplicate_in_same_scope() {
    let mut stack = ScopeStack::new();
    stack.push_scope();
    assert!(stack
        .enter("x", TypeDesc::INTEGER, Span::new(0, 1), Position::new(1, 1))
        .is_ok());
    let err = stack.enter("x", TypeDesc::REAL, Span::new(10, 11), Position::new(1, 11));
    assert_eq!(
        err,
        Err(SemanticError::DuplicateDeclaration {
            name: "x".into(),
            span: Span::new(10, 11),
            pos: Position::new(1, 11),
            previous: Span::new(0, 1),
        })
    );
    // The rejected declaration takes no storage.
    assert_eq!(stack.current().map(|s| s.offset), Some(4));
}

#[test]
fn underflow() {
    let mut stack = ScopeStack::new();
    assert_eq!(stack.pop_scope(), Err(SemanticError::ScopeUnderflow));
    assert_eq!(
        enter(&mut stack, "x", TypeDesc::INTEGER),
        Err(SemanticError::ScopeUnderflow)
    );
}
