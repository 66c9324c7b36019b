use pretty_assertions::assert_eq;

use super::*;

fn tags(set: &BTreeSet<TokenTag>) -> Vec<TokenTag> {
    set.iter().copied().collect()
}

fn analyse() -> (FirstSets, FollowSets) {
    let grammar = Grammar::arithmetic();
    let first = FirstSets::compute(&grammar);
    let follow = FollowSets::compute(&grammar, &first);
    (first, follow)
}

#[test]
fn first_sets_of_arithmetic_grammar() {
    let (first, _) = analyse();
    for nt in [NonTerminal::E, NonTerminal::T, NonTerminal::F] {
        let set = first.get(nt).cloned().unwrap_or_default();
        assert_eq!(tags(&set.terminals), vec![TokenTag::Ident, TokenTag::LParen], "{nt}");
        assert!(!set.nullable, "{nt}");
    }

    let e2 = first.get(NonTerminal::E2).cloned().unwrap_or_default();
    assert_eq!(tags(&e2.terminals), vec![TokenTag::Plus]);
    assert!(e2.nullable);

    let t2 = first.get(NonTerminal::T2).cloned().unwrap_or_default();
    assert_eq!(tags(&t2.terminals), vec![TokenTag::Star]);
    assert!(t2.nullable);
}

#[test]
fn follow_sets_of_arithmetic_grammar() {
    let (_, follow) = analyse();
    let follow_of = |nt| follow.get(nt).map(tags).unwrap_or_default();

    let e_follow = vec![TokenTag::EndMarker, TokenTag::RParen];
    assert_eq!(follow_of(NonTerminal::E), e_follow);
    assert_eq!(follow_of(NonTerminal::E2), e_follow);

    let t_follow = vec![TokenTag::EndMarker, TokenTag::Plus, TokenTag::RParen];
    assert_eq!(follow_of(NonTerminal::T), t_follow);
    assert_eq!(follow_of(NonTerminal::T2), t_follow);

    assert_eq!(
        follow_of(NonTerminal::F),
        vec![
            TokenTag::EndMarker,
            TokenTag::Plus,
            TokenTag::Star,
            TokenTag::RParen,
        ]
    );
    assert!(follow.contains(NonTerminal::F, TokenTag::Star));
    assert!(!follow.contains(NonTerminal::E, TokenTag::Plus));
}

#[test]
fn sequence_first_skips_nullable_prefix() {
    let (first, _) = analyse();
    let seq = [
        GrammarSymbol::NonTerminal(NonTerminal::T2),
        GrammarSymbol::NonTerminal(NonTerminal::E2),
    ];
    let set = first.of_sequence(&seq);
    assert_eq!(tags(&set.terminals), vec![TokenTag::Plus, TokenTag::Star]);
    assert!(set.nullable);

    let eps = first.of_sequence(&[GrammarSymbol::Epsilon]);
    assert!(eps.terminals.is_empty());
    assert!(eps.nullable);

    let empty = first.of_sequence(&[]);
    assert!(empty.nullable);
}
