//! Recursive-descent declaration pass.
//!
//! ```text
//! Program -> Scope Decls
//! Decls   -> id ':' Type ( ';' Decls )? | ε
//! Type    -> 'integer' | 'real' | 'ptr' Type
//! ```
//!
//! `Scope` opens a table at offset 0. Each declaration is entered at the
//! running offset, which then advances by the type's width. When the
//! sequence ends, the scope closes and the table's width is the final
//! offset. One token of lookahead is held; the scanner is pulled once per
//! consumed token. A `;` directly before the end of input is accepted.

use tabula_ir::{Token, TokenKind};
use tabula_lexer::Scanner;
use tabula_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{ScopeStack, SemanticError, SymbolTable, TypeDesc};

/// Builds the symbol table for one declaration block.
pub struct SymbolTableBuilder<'s> {
    scanner: &'s mut Scanner,
    lookahead: Token,
    scopes: ScopeStack,
}

impl<'s> SymbolTableBuilder<'s> {
    pub fn new(scanner: &'s mut Scanner) -> Self {
        let lookahead = scanner.next_token();
        SymbolTableBuilder {
            scanner,
            lookahead,
            scopes: ScopeStack::new(),
        }
    }

    /// Run the pass over the whole input.
    ///
    /// Aborts at the first malformed declaration.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(mut self) -> Result<SymbolTable, SemanticError> {
        match self.program() {
            Ok(table) => {
                debug!(entries = table.len(), width = ?table.width(), "symbol table built");
                Ok(table)
            }
            Err(err) => {
                debug!(code = %err.code(), %err, "declaration pass aborted");
                Err(err)
            }
        }
    }

    fn program(&mut self) -> Result<SymbolTable, SemanticError> {
        self.scopes.push_scope();
        self.decls()?;
        self.scopes.pop_scope()
    }

    fn decls(&mut self) -> Result<(), SemanticError> {
        loop {
            if self.at_end() {
                return Ok(());
            }
            self.decl()?;
            match self.lookahead.kind {
                TokenKind::Semicolon => {
                    self.bump();
                }
                TokenKind::EndMarker => return Ok(()),
                _ => {
                    return Err(SemanticError::ExpectedSeparator {
                        found: self.lookahead.clone(),
                    })
                }
            }
        }
    }

    /// `id ':' Type`
    fn decl(&mut self) -> Result<(), SemanticError> {
        let TokenKind::Ident(name) = &self.lookahead.kind else {
            return Err(SemanticError::ExpectedIdentifier {
                found: self.lookahead.clone(),
            });
        };
        let name = name.to_string();
        let id = self.bump();

        if self.lookahead.kind != TokenKind::Colon {
            return Err(SemanticError::MissingColon {
                name,
                found: self.lookahead.clone(),
            });
        }
        self.bump();

        let ty = self.ty()?;
        self.scopes.enter(&name, ty, id.span, id.pos)?;
        Ok(())
    }

    fn ty(&mut self) -> Result<TypeDesc, SemanticError> {
        ensure_sufficient_stack(|| match self.lookahead.kind {
            TokenKind::Integer => {
                self.bump();
                Ok(TypeDesc::INTEGER)
            }
            TokenKind::Real => {
                self.bump();
                Ok(TypeDesc::REAL)
            }
            TokenKind::Ptr => {
                self.bump();
                Ok(TypeDesc::pointer_to(self.ty()?))
            }
            _ => Err(SemanticError::UnknownType {
                found: self.lookahead.clone(),
            }),
        })
    }

    fn at_end(&self) -> bool {
        self.lookahead.kind.is_end_marker()
    }

    /// Consume the lookahead, returning it.
    fn bump(&mut self) -> Token {
        std::mem::replace(&mut self.lookahead, self.scanner.next_token())
    }
}

#[cfg(test)]
mod tests;
