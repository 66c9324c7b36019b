//! Lexical scanner for the Tabula front-end.
//!
//! The [`Scanner`] is pull-based: each consumer calls
//! [`Scanner::next_token`] once per lookahead. [`lex`] drains a whole
//! source into a token list for tools and tests.

mod keywords;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use tabula_diagnostic::Diagnostic;
use tabula_ir::Token;

/// Every token of a source, up to and including the end marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Returns `true` if scanning recorded any lexical error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(LexError::to_diagnostic).collect()
    }
}

/// Scan `source` to the end marker.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind.is_end_marker();
        tokens.push(token);
        if done {
            break;
        }
    }
    LexOutput {
        tokens,
        errors: scanner.take_errors(),
    }
}
