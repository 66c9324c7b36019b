//! Table-driven predictive parser.
//!
//! The stack starts as `[#, S]`. Each step looks at the top symbol `X` and
//! the lookahead `a`:
//!
//! - terminal `X`: match and advance when `X == a`, otherwise error;
//! - `X == # == a`: accept;
//! - nonterminal `X`: expand with the table entry at `(X, a)`, pushing the
//!   right-hand side in reverse so its leftmost symbol ends on top.
//!
//! In [`ParseMode::Strict`] the first error ends the run. In
//! [`ParseMode::Recover`] the parser resynchronizes and keeps going so
//! every error in the input is reported, but the run is still rejected.

use std::fmt;

use smallvec::smallvec;
use tabula_ir::Token;
use tabula_lexer::{LexError, Scanner};
use tracing::{debug, trace};

use crate::{GrammarSymbol, NonTerminal, ParseTable, Rhs, SyntaxError, TableEntry};

/// Error-handling policy for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Stop at the first syntax error.
    #[default]
    Strict,
    /// Skip tokens or pop symbols past errors, collecting all of them.
    Recover,
}

/// One step of the derivation trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseStep {
    /// A terminal on the stack matched the lookahead.
    Match(Token),
    /// A nonterminal was replaced by a right-hand side (`[ε]` pushes nothing).
    Expand { nonterminal: NonTerminal, rhs: Rhs },
    Accept,
    /// Recovery dropped the lookahead.
    Skip(Token),
    /// Recovery popped a nonterminal whose FOLLOW set holds the lookahead.
    Synch(NonTerminal),
    /// Recovery popped an unmatched terminal.
    PopTerminal(GrammarSymbol),
}

impl fmt::Display for ParseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStep::Match(token) => write!(f, "match {}", token.kind),
            ParseStep::Expand { nonterminal, rhs } => {
                write!(f, "expand {nonterminal} ->")?;
                for sym in rhs {
                    write!(f, " {sym}")?;
                }
                Ok(())
            }
            ParseStep::Accept => f.write_str("accept"),
            ParseStep::Skip(token) => write!(f, "skip {}", token.kind),
            ParseStep::Synch(nt) => write!(f, "synch {nt}"),
            ParseStep::PopTerminal(sym) => write!(f, "pop `{sym}`"),
        }
    }
}

/// Result of one parse run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct ParseOutcome {
    pub steps: Vec<ParseStep>,
    /// Syntax errors; at most one in strict mode.
    pub errors: Vec<SyntaxError>,
    /// Lexical errors the scanner recovered from during the run.
    pub lex_errors: Vec<LexError>,
}

impl ParseOutcome {
    /// The input was accepted: the run reached `#` on `#` with no syntax error.
    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty() && self.steps.last() == Some(&ParseStep::Accept)
    }

    /// The first syntax error, i.e. the reason for rejection.
    pub fn first_error(&self) -> Option<&SyntaxError> {
        self.errors.first()
    }

    /// The derivation trace on acceptance, the first error on rejection.
    pub fn into_result(self) -> Result<Vec<ParseStep>, SyntaxError> {
        let ParseOutcome { steps, errors, .. } = self;
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(steps),
        }
    }
}

/// Predictive parser over a borrowed table.
///
/// The table is read-only, so one table can back any number of parsers.
#[derive(Clone, Debug)]
pub struct Parser<'t> {
    table: &'t ParseTable,
    mode: ParseMode,
}

impl<'t> Parser<'t> {
    pub fn new(table: &'t ParseTable) -> Self {
        Parser {
            table,
            mode: ParseMode::Strict,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse one sentence pulled from `scanner`.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = ?self.mode))]
    pub fn parse(&self, scanner: &mut Scanner) -> ParseOutcome {
        let mut run = Run {
            table: self.table,
            mode: self.mode,
            stack: vec![
                GrammarSymbol::EndMarker,
                GrammarSymbol::NonTerminal(self.table.start()),
            ],
            lookahead: scanner.next_token(),
            outcome: ParseOutcome::default(),
        };
        run.drive(scanner);

        let mut outcome = run.outcome;
        outcome.lex_errors = scanner.take_errors();
        if outcome.is_accepted() {
            debug!(steps = outcome.steps.len(), "accepted");
        } else {
            debug!(errors = outcome.errors.len(), "rejected");
        }
        outcome
    }

    /// Parse `source` from the start.
    pub fn parse_source(&self, source: &str) -> ParseOutcome {
        self.parse(&mut Scanner::new(source))
    }
}

/// Mutable state of one run.
struct Run<'t> {
    table: &'t ParseTable,
    mode: ParseMode,
    stack: Vec<GrammarSymbol>,
    lookahead: Token,
    outcome: ParseOutcome,
}

/// Whether the main loop keeps going after a step.
enum Flow {
    Continue,
    Stop,
}

impl Run<'_> {
    fn drive(&mut self, scanner: &mut Scanner) {
        while let Some(&top) = self.stack.last() {
            let flow = match top {
                GrammarSymbol::EndMarker if self.lookahead.kind.is_end_marker() => {
                    self.record(ParseStep::Accept);
                    Flow::Stop
                }
                GrammarSymbol::EndMarker | GrammarSymbol::Terminal(_) => self.terminal(top, scanner),
                GrammarSymbol::NonTerminal(nt) => self.nonterminal(nt, scanner),
                GrammarSymbol::Epsilon => {
                    self.stack.pop();
                    Flow::Continue
                }
            };
            if let Flow::Stop = flow {
                return;
            }
        }
    }

    fn terminal(&mut self, expected: GrammarSymbol, scanner: &mut Scanner) -> Flow {
        if expected.as_tag() == Some(self.lookahead.tag()) {
            self.stack.pop();
            let matched = self.advance(scanner);
            self.record(ParseStep::Match(matched));
            return Flow::Continue;
        }

        self.fail(SyntaxError::UnexpectedToken {
            expected,
            found: self.lookahead.clone(),
        });
        match self.mode {
            ParseMode::Strict => Flow::Stop,
            // `#` cannot be popped; drop input until the lookahead reaches it.
            ParseMode::Recover if expected == GrammarSymbol::EndMarker => {
                let skipped = self.advance(scanner);
                self.record(ParseStep::Skip(skipped));
                Flow::Continue
            }
            ParseMode::Recover => {
                self.stack.pop();
                self.record(ParseStep::PopTerminal(expected));
                Flow::Continue
            }
        }
    }

    fn nonterminal(&mut self, nt: NonTerminal, scanner: &mut Scanner) -> Flow {
        let table = self.table;
        match table.lookup(nt, self.lookahead.tag()) {
            TableEntry::Defined(rhs) => {
                self.stack.pop();
                self.stack.extend(rhs.iter().rev().copied());
                self.record(ParseStep::Expand {
                    nonterminal: nt,
                    rhs: rhs.clone(),
                });
                Flow::Continue
            }
            TableEntry::Epsilon => {
                self.stack.pop();
                self.record(ParseStep::Expand {
                    nonterminal: nt,
                    rhs: smallvec![GrammarSymbol::Epsilon],
                });
                Flow::Continue
            }
            TableEntry::Undefined => {
                self.fail(SyntaxError::NoProduction {
                    nonterminal: nt,
                    found: self.lookahead.clone(),
                });
                match self.mode {
                    ParseMode::Strict => Flow::Stop,
                    ParseMode::Recover => {
                        let tag = self.lookahead.tag();
                        if self.lookahead.kind.is_end_marker()
                            || table.follow_sets().contains(nt, tag)
                        {
                            self.stack.pop();
                            self.record(ParseStep::Synch(nt));
                        } else {
                            let skipped = self.advance(scanner);
                            self.record(ParseStep::Skip(skipped));
                        }
                        Flow::Continue
                    }
                }
            }
        }
    }

    /// Replace the lookahead with the next token, returning the old one.
    fn advance(&mut self, scanner: &mut Scanner) -> Token {
        std::mem::replace(&mut self.lookahead, scanner.next_token())
    }

    fn record(&mut self, step: ParseStep) {
        trace!(%step, depth = self.stack.len(), "step");
        self.outcome.steps.push(step);
    }

    fn fail(&mut self, err: SyntaxError) {
        debug!(code = %err.code(), %err, pos = %err.pos(), "syntax error");
        self.outcome.errors.push(err);
    }
}
