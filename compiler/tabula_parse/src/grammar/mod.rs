//! Context-free grammars over [`GrammarSymbol`]s.

use std::collections::BTreeSet;
use std::fmt;

use smallvec::{smallvec, SmallVec};
use tabula_ir::TokenTag;

use crate::{GrammarError, GrammarSymbol, NonTerminal};

/// A production right-hand side. The empty production is `[Epsilon]`.
pub type Rhs = SmallVec<[GrammarSymbol; 4]>;

/// One production `lhs -> rhs`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Production {
    pub lhs: NonTerminal,
    pub rhs: Rhs,
}

impl Production {
    pub fn new(lhs: NonTerminal, rhs: impl IntoIterator<Item = GrammarSymbol>) -> Self {
        Production {
            lhs,
            rhs: rhs.into_iter().collect(),
        }
    }

    /// `lhs -> ε`.
    pub fn epsilon(lhs: NonTerminal) -> Self {
        Production {
            lhs,
            rhs: smallvec![GrammarSymbol::Epsilon],
        }
    }

    pub fn is_epsilon(&self) -> bool {
        self.rhs.as_slice() == [GrammarSymbol::Epsilon]
    }

    /// Check the shape of the right-hand side.
    ///
    /// A right-hand side is non-empty, holds `ε` only as its sole entry,
    /// and never mentions the end marker.
    pub fn validate(&self) -> Result<(), GrammarError> {
        let reason = if self.rhs.is_empty() {
            "empty right-hand side; write `ε` for the empty production"
        } else if self.rhs.len() > 1 && self.rhs.contains(&GrammarSymbol::Epsilon) {
            "`ε` mixed with other symbols"
        } else if self.rhs.contains(&GrammarSymbol::EndMarker) {
            "end marker in right-hand side"
        } else {
            return Ok(());
        };
        Err(GrammarError::MalformedProduction {
            production: self.clone(),
            reason,
        })
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        for sym in &self.rhs {
            write!(f, " {sym}")?;
        }
        Ok(())
    }
}

/// A start symbol and its productions, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    start: NonTerminal,
    productions: Vec<Production>,
}

impl Grammar {
    pub fn new(start: NonTerminal, productions: Vec<Production>) -> Self {
        Grammar { start, productions }
    }

    /// The sample expression grammar:
    ///
    /// ```text
    /// E  -> T E2
    /// E2 -> + T E2 | ε
    /// T  -> F T2
    /// T2 -> * F T2 | ε
    /// F  -> ( E ) | id
    /// ```
    pub fn arithmetic() -> Self {
        use GrammarSymbol::{NonTerminal as N, Terminal as Tm};
        use NonTerminal::{E, E2, F, T, T2};

        Grammar::new(
            E,
            vec![
                Production::new(E, [N(T), N(E2)]),
                Production::new(E2, [Tm(TokenTag::Plus), N(T), N(E2)]),
                Production::epsilon(E2),
                Production::new(T, [N(F), N(T2)]),
                Production::new(T2, [Tm(TokenTag::Star), N(F), N(T2)]),
                Production::epsilon(T2),
                Production::new(F, [Tm(TokenTag::LParen), N(E), Tm(TokenTag::RParen)]),
                Production::new(F, [Tm(TokenTag::Ident)]),
            ],
        )
    }

    pub fn start(&self) -> NonTerminal {
        self.start
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn productions_for(&self, nt: NonTerminal) -> impl Iterator<Item = &Production> {
        self.productions.iter().filter(move |p| p.lhs == nt)
    }

    /// Nonterminals in order of first appearance, start symbol first.
    pub fn nonterminals(&self) -> Vec<NonTerminal> {
        let mut seen = vec![self.start];
        let mentioned = self.productions.iter().flat_map(|p| {
            std::iter::once(p.lhs).chain(p.rhs.iter().filter_map(|sym| match sym {
                GrammarSymbol::NonTerminal(nt) => Some(*nt),
                _ => None,
            }))
        });
        for nt in mentioned {
            if !seen.contains(&nt) {
                seen.push(nt);
            }
        }
        seen
    }

    /// Terminals mentioned by any production, excluding the end marker.
    pub fn terminals(&self) -> BTreeSet<TokenTag> {
        self.productions
            .iter()
            .flat_map(|p| p.rhs.iter())
            .filter_map(|sym| match sym {
                GrammarSymbol::Terminal(tag) => Some(*tag),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.productions {
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}
