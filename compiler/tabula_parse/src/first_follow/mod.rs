//! FIRST and FOLLOW sets by fixed-point closure.
//!
//! Sets hold [`TokenTag`]s. FOLLOW sets use [`TokenTag::EndMarker`] for `#`;
//! FIRST sets record nullability in a separate flag instead of storing `ε`.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tabula_ir::TokenTag;
use tracing::trace;

use crate::{Grammar, GrammarSymbol, NonTerminal};

/// FIRST set of a nonterminal or symbol sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct First {
    pub terminals: BTreeSet<TokenTag>,
    /// Whether the sequence can derive the empty string.
    pub nullable: bool,
}

/// FIRST sets for every nonterminal of a grammar.
#[derive(Clone, Debug, Default)]
pub struct FirstSets {
    sets: FxHashMap<NonTerminal, First>,
}

impl FirstSets {
    pub fn compute(grammar: &Grammar) -> Self {
        let mut sets: FxHashMap<NonTerminal, First> = grammar
            .nonterminals()
            .into_iter()
            .map(|nt| (nt, First::default()))
            .collect();

        let mut rounds = 0_u32;
        let mut changed = true;
        while changed {
            changed = false;
            rounds += 1;
            for p in grammar.productions() {
                let seq = first_of_sequence(&sets, &p.rhs);
                let entry = sets.entry(p.lhs).or_default();
                let before = entry.terminals.len();
                entry.terminals.extend(seq.terminals);
                if entry.terminals.len() != before || (seq.nullable && !entry.nullable) {
                    entry.nullable |= seq.nullable;
                    changed = true;
                }
            }
        }
        trace!(rounds, "FIRST sets converged");
        FirstSets { sets }
    }

    pub fn get(&self, nt: NonTerminal) -> Option<&First> {
        self.sets.get(&nt)
    }

    /// FIRST of a symbol sequence, e.g. a production right-hand side.
    pub fn of_sequence(&self, symbols: &[GrammarSymbol]) -> First {
        first_of_sequence(&self.sets, symbols)
    }
}

fn first_of_sequence(sets: &FxHashMap<NonTerminal, First>, symbols: &[GrammarSymbol]) -> First {
    let mut first = First {
        terminals: BTreeSet::new(),
        nullable: true,
    };
    for sym in symbols {
        match sym {
            GrammarSymbol::Epsilon => {}
            GrammarSymbol::Terminal(_) | GrammarSymbol::EndMarker => {
                first.terminals.extend(sym.as_tag());
                first.nullable = false;
                break;
            }
            GrammarSymbol::NonTerminal(nt) => {
                let Some(inner) = sets.get(nt) else {
                    first.nullable = false;
                    break;
                };
                first.terminals.extend(inner.terminals.iter().copied());
                if !inner.nullable {
                    first.nullable = false;
                    break;
                }
            }
        }
    }
    first
}

/// FOLLOW sets for every nonterminal of a grammar.
#[derive(Clone, Debug, Default)]
pub struct FollowSets {
    sets: FxHashMap<NonTerminal, BTreeSet<TokenTag>>,
}

impl FollowSets {
    pub fn compute(grammar: &Grammar, first: &FirstSets) -> Self {
        let mut sets: FxHashMap<NonTerminal, BTreeSet<TokenTag>> = grammar
            .nonterminals()
            .into_iter()
            .map(|nt| (nt, BTreeSet::new()))
            .collect();
        sets.entry(grammar.start())
            .or_default()
            .insert(TokenTag::EndMarker);

        let mut changed = true;
        while changed {
            changed = false;
            for p in grammar.productions() {
                for (i, sym) in p.rhs.iter().enumerate() {
                    let GrammarSymbol::NonTerminal(b) = *sym else {
                        continue;
                    };
                    let rest = first.of_sequence(&p.rhs[i + 1..]);
                    let mut additions = rest.terminals;
                    if rest.nullable {
                        if let Some(lhs_follow) = sets.get(&p.lhs) {
                            additions.extend(lhs_follow.iter().copied());
                        }
                    }
                    let target = sets.entry(b).or_default();
                    let before = target.len();
                    target.extend(additions);
                    changed |= target.len() != before;
                }
            }
        }
        FollowSets { sets }
    }

    pub fn get(&self, nt: NonTerminal) -> Option<&BTreeSet<TokenTag>> {
        self.sets.get(&nt)
    }

    /// Returns `true` if `tag` may follow `nt`.
    pub fn contains(&self, nt: NonTerminal, tag: TokenTag) -> bool {
        self.sets.get(&nt).is_some_and(|set| set.contains(&tag))
    }
}

#[cfg(test)]
mod tests;
