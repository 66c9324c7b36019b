//! Symbol tables for Tabula declaration blocks.
//!
//! [`SymbolTableBuilder`] walks `id : Type` declarations separated by `;`,
//! assigning each name a byte offset within its scope. Widths are fixed:
//! `integer` 4, `real` 8, any pointer 4.

mod builder;
mod error;
mod scope;
mod table;
mod types;

pub use builder::SymbolTableBuilder;
pub use error::SemanticError;
pub use scope::{Scope, ScopeStack};
pub use table::{SymbolEntry, SymbolTable};
pub use types::{BaseType, TypeDesc, INTEGER_WIDTH, POINTER_WIDTH, REAL_WIDTH};

use tabula_lexer::Scanner;

/// Build the symbol table for `source`.
pub fn build_symbol_table(source: &str) -> Result<SymbolTable, SemanticError> {
    let mut scanner = Scanner::new(source);
    SymbolTableBuilder::new(&mut scanner).build()
}
