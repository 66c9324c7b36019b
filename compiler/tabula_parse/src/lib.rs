//! LL(1) grammar analysis and table-driven predictive parsing.
//!
//! A [`Grammar`] is analysed into FIRST and FOLLOW sets, compiled into a
//! read-only [`ParseTable`], and driven by a [`Parser`] that pulls tokens
//! from a [`Scanner`](tabula_lexer::Scanner) one lookahead at a time.
//!
//! ```text
//! let table = ParseTable::arithmetic()?;
//! let outcome = Parser::new(&table).parse_source("id + id * id #");
//! assert!(outcome.is_accepted());
//! ```

mod error;
mod first_follow;
mod grammar;
mod parser;
mod symbol;
mod table;

pub use error::{GrammarError, SyntaxError};
pub use first_follow::{First, FirstSets, FollowSets};
pub use grammar::{Grammar, Production, Rhs};
pub use parser::{ParseMode, ParseOutcome, ParseStep, Parser};
pub use symbol::{GrammarSymbol, NonTerminal};
pub use table::{ParseTable, TableEntry};

/// Strict-mode recognition of `source` against the arithmetic grammar.
pub fn recognize(source: &str) -> Result<bool, GrammarError> {
    let table = ParseTable::arithmetic()?;
    Ok(Parser::new(&table).parse_source(source).is_accepted())
}

#[cfg(test)]
mod tests;
