//! Declaration scope stack.
//!
//! Each open scope pairs its table with the running offset for the next
//! declaration, so the two are always pushed and popped together.

use tabula_ir::{Position, Span};
use tracing::{debug, trace};

use crate::{SemanticError, SymbolEntry, SymbolTable, TypeDesc};

/// One open scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    pub table: SymbolTable,
    /// Offset the next declaration will receive.
    pub offset: u32,
}

/// Stack of open scopes, innermost last.
#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope with an empty table at offset 0.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
        debug!(depth = self.scopes.len(), "scope opened");
    }

    /// Close the innermost scope, finalizing its width to the running offset.
    pub fn pop_scope(&mut self) -> Result<SymbolTable, SemanticError> {
        let Scope { mut table, offset } = self.scopes.pop().ok_or(SemanticError::ScopeUnderflow)?;
        table.finalize(offset);
        debug!(
            depth = self.scopes.len(),
            entries = table.len(),
            width = offset,
            "scope closed"
        );
        Ok(table)
    }

    /// Declare `name` in the innermost scope and advance its offset by the
    /// type's width. Returns the offset assigned.
    pub fn enter(
        &mut self,
        name: &str,
        ty: TypeDesc,
        span: Span,
        pos: Position,
    ) -> Result<u32, SemanticError> {
        let scope = self.scopes.last_mut().ok_or(SemanticError::ScopeUnderflow)?;
        let offset = scope.offset;
        let width = ty.width();
        let entry = SymbolEntry {
            name: name.to_owned(),
            ty,
            offset,
            span,
        };
        if let Err(rejected) = scope.table.enter(entry) {
            let previous = scope
                .table
                .get(&rejected.name)
                .map_or(Span::DUMMY, |e| e.span);
            return Err(SemanticError::DuplicateDeclaration {
                name: rejected.name,
                span,
                pos,
                previous,
            });
        }
        scope.offset = offset.saturating_add(width);
        trace!(name, offset, width, "entered");
        Ok(offset)
    }

    /// The innermost open scope.
    pub fn current(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests;
