//! Grammar symbols.
//!
//! Terminals, nonterminals and the two markers live in one closed sum type,
//! so a stack entry or table key can never be confused across categories.

use std::fmt;

use tabula_ir::TokenTag;

/// Nonterminals of the arithmetic expression grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NonTerminal {
    /// Expression.
    E,
    /// Expression tail: `+ T E2 | ε`.
    E2,
    /// Term.
    T,
    /// Term tail: `* F T2 | ε`.
    T2,
    /// Factor.
    F,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 5] = [
        NonTerminal::E,
        NonTerminal::E2,
        NonTerminal::T,
        NonTerminal::T2,
        NonTerminal::F,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            NonTerminal::E => "E",
            NonTerminal::E2 => "E2",
            NonTerminal::T => "T",
            NonTerminal::T2 => "T2",
            NonTerminal::F => "F",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of a parse stack or a production's right-hand side.
///
/// The end marker has its own variant; [`GrammarSymbol::terminal`] maps
/// [`TokenTag::EndMarker`] onto it so there is exactly one spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrammarSymbol {
    Terminal(TokenTag),
    NonTerminal(NonTerminal),
    /// `#`, the bottom of every parse stack.
    EndMarker,
    /// The empty production. Only valid as the sole right-hand-side entry.
    Epsilon,
}

impl GrammarSymbol {
    pub const fn terminal(tag: TokenTag) -> Self {
        match tag {
            TokenTag::EndMarker => GrammarSymbol::EndMarker,
            tag => GrammarSymbol::Terminal(tag),
        }
    }

    /// Returns `true` for symbols matched directly against the lookahead.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GrammarSymbol::Terminal(_) | GrammarSymbol::EndMarker)
    }

    /// The token tag a terminal-like symbol matches.
    pub const fn as_tag(self) -> Option<TokenTag> {
        match self {
            GrammarSymbol::Terminal(tag) => Some(tag),
            GrammarSymbol::EndMarker => Some(TokenTag::EndMarker),
            GrammarSymbol::NonTerminal(_) | GrammarSymbol::Epsilon => None,
        }
    }
}

impl From<NonTerminal> for GrammarSymbol {
    fn from(nt: NonTerminal) -> Self {
        GrammarSymbol::NonTerminal(nt)
    }
}

impl From<TokenTag> for GrammarSymbol {
    fn from(tag: TokenTag) -> Self {
        GrammarSymbol::terminal(tag)
    }
}

impl fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarSymbol::Terminal(tag) => write!(f, "{tag}"),
            GrammarSymbol::NonTerminal(nt) => write!(f, "{nt}"),
            GrammarSymbol::EndMarker => f.write_str("#"),
            GrammarSymbol::Epsilon => f.write_str("ε"),
        }
    }
}
