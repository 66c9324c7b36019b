//! Predictive parsing table.
//!
//! Built once from a grammar's FIRST and FOLLOW sets. For each production
//! `A -> α`, the production is placed under `(A, a)` for every `a` in
//! FIRST(α), and under `(A, b)` for every `b` in FOLLOW(A) when α is
//! nullable. Every `(nonterminal, terminal)` cell of the grammar exists,
//! so an [`TableEntry::Undefined`] cell is a real answer and never a
//! missing key.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;
use tabula_ir::TokenTag;
use tracing::debug;

use crate::{FirstSets, FollowSets, Grammar, GrammarError, NonTerminal, Production, Rhs};

/// Content of one table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEntry {
    /// Expand with this right-hand side.
    Defined(Rhs),
    /// Expand with the empty production: pop, push nothing.
    Epsilon,
    /// No production applies. A syntax error at parse time.
    Undefined,
}

impl TableEntry {
    fn for_production(p: &Production) -> Self {
        if p.is_epsilon() {
            TableEntry::Epsilon
        } else {
            TableEntry::Defined(p.rhs.clone())
        }
    }

    fn to_production(&self, lhs: NonTerminal) -> Option<Production> {
        match self {
            TableEntry::Defined(rhs) => Some(Production {
                lhs,
                rhs: rhs.clone(),
            }),
            TableEntry::Epsilon => Some(Production::epsilon(lhs)),
            TableEntry::Undefined => None,
        }
    }
}

static UNDEFINED: TableEntry = TableEntry::Undefined;

/// Immutable LL(1) table plus the analysis it was built from.
#[derive(Clone, Debug)]
pub struct ParseTable {
    start: NonTerminal,
    nonterminals: Vec<NonTerminal>,
    /// Grammar terminals followed by the end marker.
    terminals: Vec<TokenTag>,
    cells: FxHashMap<(NonTerminal, TokenTag), TableEntry>,
    first: FirstSets,
    follow: FollowSets,
}

impl ParseTable {
    /// Build the table, rejecting malformed productions and LL(1) conflicts.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(grammar: &Grammar) -> Result<Self, GrammarError> {
        for p in grammar.productions() {
            p.validate()?;
        }

        let first = FirstSets::compute(grammar);
        let follow = FollowSets::compute(grammar, &first);

        let nonterminals = grammar.nonterminals();
        let mut terminals: Vec<TokenTag> = grammar.terminals().into_iter().collect();
        terminals.push(TokenTag::EndMarker);

        let mut cells = FxHashMap::default();
        for &nt in &nonterminals {
            for &t in &terminals {
                cells.insert((nt, t), TableEntry::Undefined);
            }
        }

        let empty = BTreeSet::new();
        for p in grammar.productions() {
            let seq = first.of_sequence(&p.rhs);
            let mut lookaheads = seq.terminals;
            if seq.nullable {
                lookaheads.extend(follow.get(p.lhs).unwrap_or(&empty).iter().copied());
            }
            for t in lookaheads {
                place(&mut cells, p, t)?;
            }
        }

        debug!(
            nonterminals = nonterminals.len(),
            terminals = terminals.len(),
            "parse table built"
        );
        Ok(ParseTable {
            start: grammar.start(),
            nonterminals,
            terminals,
            cells,
            first,
            follow,
        })
    }

    /// Table for [`Grammar::arithmetic`].
    pub fn arithmetic() -> Result<Self, GrammarError> {
        Self::build(&Grammar::arithmetic())
    }

    /// Entry for `(nt, terminal)`. Cells outside the grammar are undefined.
    pub fn lookup(&self, nt: NonTerminal, terminal: TokenTag) -> &TableEntry {
        self.cells.get(&(nt, terminal)).unwrap_or(&UNDEFINED)
    }

    pub fn start(&self) -> NonTerminal {
        self.start
    }

    pub fn nonterminals(&self) -> &[NonTerminal] {
        &self.nonterminals
    }

    /// Column terminals, end marker last.
    pub fn terminals(&self) -> &[TokenTag] {
        &self.terminals
    }

    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow
    }
}

fn place(
    cells: &mut FxHashMap<(NonTerminal, TokenTag), TableEntry>,
    p: &Production,
    terminal: TokenTag,
) -> Result<(), GrammarError> {
    let entry = TableEntry::for_production(p);
    let cell = cells.entry((p.lhs, terminal)).or_insert(TableEntry::Undefined);
    if let Some(existing) = cell.to_production(p.lhs) {
        if *cell != entry {
            return Err(GrammarError::Conflict {
                nonterminal: p.lhs,
                terminal,
                first: existing,
                second: p.clone(),
            });
        }
    }
    *cell = entry;
    Ok(())
}

impl fmt::Display for ParseTable {
    /// Render as a grid: one row per nonterminal, one column per terminal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |entry: &TableEntry| match entry {
            TableEntry::Defined(rhs) => rhs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            TableEntry::Epsilon => "ε".to_string(),
            TableEntry::Undefined => String::new(),
        };

        let rows: Vec<(NonTerminal, Vec<String>)> = self
            .nonterminals
            .iter()
            .map(|&nt| {
                let cells = self
                    .terminals
                    .iter()
                    .map(|&t| render(self.lookup(nt, t)))
                    .collect();
                (nt, cells)
            })
            .collect();

        let head_width = self
            .nonterminals
            .iter()
            .map(|nt| nt.name().len())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .terminals
            .iter()
            .enumerate()
            .map(|(col, t)| {
                rows.iter()
                    .map(|(_, cells)| cells[col].chars().count())
                    .chain(std::iter::once(t.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:head_width$}", "")?;
        for (t, width) in self.terminals.iter().zip(&widths) {
            write!(f, " | {:width$}", t.name())?;
        }
        writeln!(f)?;
        for (nt, cells) in &rows {
            write!(f, "{:head_width$}", nt.name())?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, " | {cell:width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
