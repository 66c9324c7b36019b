//! Subcommand implementations.
//!
//! Each command writes its report to `out` and its diagnostics to an
//! emitter, and returns whether the run succeeded: no lexical error for
//! `lex`, acceptance for `parse`, a completed table for `symtab`.

use std::io::{self, IsTerminal, Write};

use tabula_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tabula_diagnostic::Diagnostic;
use tabula_lexer::{lex, LexError, Scanner};
use tabula_parse::{ParseMode, ParseTable, Parser};
use tabula_symtab::SymbolTableBuilder;
use tracing::debug;

use crate::cli::{Command, Input, Invocation};
use crate::DriverError;

/// Run an invocation against the real stdout and stderr.
///
/// `Help` and `Version` are handled by the binary and succeed trivially here.
pub fn run(invocation: &Invocation) -> Result<bool, DriverError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &invocation.command {
        Command::Lex(input) => {
            let source = read_input(input)?;
            let mut emitter = stderr_emitter(invocation.color, &source);
            lex_source(&source, &mut out, &mut emitter)
        }
        Command::Parse { input, mode } => {
            let source = read_input(input)?;
            let mut emitter = stderr_emitter(invocation.color, &source);
            parse_source(&source, *mode, &mut out, &mut emitter)
        }
        Command::Symtab(input) => {
            let source = read_input(input)?;
            let mut emitter = stderr_emitter(invocation.color, &source);
            symtab_source(&source, &mut out, &mut emitter)
        }
        Command::Table => print_table(&mut out),
        Command::Help | Command::Version => Ok(true),
    }
}

/// Read the source for a command.
pub fn read_input(input: &Input) -> Result<String, DriverError> {
    match input {
        Input::Inline(source) => Ok(source.clone()),
        Input::File(path) => {
            debug!(path, "reading source");
            std::fs::read_to_string(path).map_err(|source| DriverError::Read {
                path: path.clone(),
                source,
            })
        }
    }
}

fn stderr_emitter(color: ColorMode, source: &str) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(color, io::stderr().is_terminal()).with_source(source)
}

/// Print every token with its position, then any lexical diagnostics.
pub fn lex_source(
    source: &str,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<bool, DriverError> {
    let output = lex(source);
    for token in &output.tokens {
        writeln!(out, "{:<7} {}", token.pos.to_string(), token.kind)?;
    }
    report(emitter, &output.diagnostics());
    Ok(!output.has_errors())
}

/// Parse against the arithmetic grammar and print `accepted` or `rejected`.
pub fn parse_source(
    source: &str,
    mode: ParseMode,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<bool, DriverError> {
    let table = ParseTable::arithmetic()?;
    let mut scanner = Scanner::new(source);
    let outcome = Parser::new(&table).with_mode(mode).parse(&mut scanner);

    let diagnostics: Vec<Diagnostic> = outcome
        .lex_errors
        .iter()
        .map(LexError::to_diagnostic)
        .chain(outcome.errors.iter().map(|e| e.to_diagnostic()))
        .collect();
    report(emitter, &diagnostics);

    let accepted = outcome.is_accepted();
    writeln!(out, "{}", if accepted { "accepted" } else { "rejected" })?;
    Ok(accepted)
}

/// Build and print the symbol table for a declaration block.
pub fn symtab_source(
    source: &str,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<bool, DriverError> {
    let mut scanner = Scanner::new(source);
    let result = SymbolTableBuilder::new(&mut scanner).build();

    let mut diagnostics: Vec<Diagnostic> = scanner
        .take_errors()
        .iter()
        .map(LexError::to_diagnostic)
        .collect();
    let built = match result {
        Ok(table) => {
            write!(out, "{table}")?;
            true
        }
        Err(err) => {
            diagnostics.push(err.to_diagnostic());
            false
        }
    };
    report(emitter, &diagnostics);
    Ok(built)
}

/// Print the arithmetic grammar and its predictive table.
pub fn print_table(out: &mut impl Write) -> Result<bool, DriverError> {
    let table = ParseTable::arithmetic()?;
    write!(out, "{}", tabula_parse::Grammar::arithmetic())?;
    writeln!(out)?;
    write!(out, "{table}")?;
    Ok(true)
}

fn report(emitter: &mut impl DiagnosticEmitter, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}

#[cfg(test)]
mod tests;
