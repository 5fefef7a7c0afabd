//! Property-based checks of the encoder against exhaustive enumeration.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::dict::CodeDictionary;
use crate::encoder::{build_lattice, join, search_shortest, JoinMode, Lattice};

const UNBOUNDED: usize = 1 << 20;

fn arb_dict() -> impl Strategy<Value = CodeDictionary> {
    prop::collection::vec(
        ("[abc]{1,3}", prop::collection::vec("[aiks,]{1,4}", 1..3)),
        0..5,
    )
    .prop_map(|entries| CodeDictionary::from_entries(entries))
}

fn arb_text() -> impl Strategy<Value = String> {
    "[abcd]{0,6}"
}

fn arb_mode() -> impl Strategy<Value = JoinMode> {
    prop_oneof![
        Just(JoinMode::Space),
        Just(JoinMode::None),
        Just(JoinMode::Scheme)
    ]
}

fn additive_mode() -> impl Strategy<Value = JoinMode> {
    prop_oneof![Just(JoinMode::Space), Just(JoinMode::None)]
}

/// Every complete path through the lattice, reduced to the shortest ones.
fn brute_force(lattice: &Lattice, mode: JoinMode) -> BTreeSet<String> {
    fn walk(
        lattice: &Lattice,
        mode: JoinMode,
        pos: usize,
        acc: String,
        out: &mut Vec<String>,
    ) {
        if pos == lattice.char_count {
            out.push(acc);
            return;
        }
        for edge in lattice.edges_at(pos) {
            walk(lattice, mode, edge.end(), join(mode, &acc, &edge.code), out);
        }
    }

    let mut all = Vec::new();
    walk(lattice, mode, 0, String::new(), &mut all);
    let min = all.iter().map(|c| c.chars().count()).min();
    all.into_iter()
        .filter(|c| Some(c.chars().count()) == min)
        .collect()
}

fn key_count(codes: &BTreeSet<String>) -> Option<usize> {
    codes.iter().next().map(|c| c.chars().count())
}

proptest! {
    #[test]
    fn lattice_covers_every_position(dict in arb_dict(), text in arb_text()) {
        let lattice = build_lattice(&dict, &text);
        prop_assert_eq!(lattice.char_count, text.chars().count());
        for pos in 0..lattice.char_count {
            prop_assert!(!lattice.edges_at(pos).is_empty());
            for edge in lattice.edges_at(pos) {
                prop_assert!(edge.end() <= lattice.char_count);
            }
        }
    }

    #[test]
    fn results_share_one_length(
        dict in arb_dict(),
        text in arb_text(),
        mode in arb_mode(),
        limit in 1usize..4,
    ) {
        let lattice = build_lattice(&dict, &text);
        let result = search_shortest(&lattice, mode, limit);
        prop_assert!(!result.is_empty());
        let lengths: BTreeSet<usize> = result.iter().map(|c| c.chars().count()).collect();
        prop_assert_eq!(lengths.len(), 1);
    }

    #[test]
    fn minimal_length_matches_brute_force(dict in arb_dict(), text in arb_text(), mode in arb_mode()) {
        let lattice = build_lattice(&dict, &text);
        let found = search_shortest(&lattice, mode, UNBOUNDED);
        let expected = brute_force(&lattice, mode);
        prop_assert_eq!(key_count(&found), key_count(&expected));
        prop_assert!(found.is_subset(&expected));
    }

    #[test]
    fn unbounded_search_is_exhaustive(dict in arb_dict(), text in arb_text(), mode in additive_mode()) {
        let lattice = build_lattice(&dict, &text);
        let found = search_shortest(&lattice, mode, UNBOUNDED);
        prop_assert_eq!(found, brute_force(&lattice, mode));
    }

    #[test]
    fn larger_limit_never_loses_encodings(
        dict in arb_dict(),
        text in arb_text(),
        mode in additive_mode(),
        small in 1usize..4,
        extra in 1usize..4,
    ) {
        let lattice = build_lattice(&dict, &text);
        let narrow = search_shortest(&lattice, mode, small);
        let wide = search_shortest(&lattice, mode, small + extra);
        prop_assert_eq!(key_count(&narrow), key_count(&wide));
        prop_assert!(narrow.is_subset(&wide));
    }

    #[test]
    fn larger_limit_never_lengthens_scheme(dict in arb_dict(), text in arb_text(), small in 1usize..4) {
        let lattice = build_lattice(&dict, &text);
        let narrow = search_shortest(&lattice, JoinMode::Scheme, small);
        let wide = search_shortest(&lattice, JoinMode::Scheme, UNBOUNDED);
        prop_assert!(key_count(&wide) <= key_count(&narrow));
    }

    #[test]
    fn none_join_concatenates(a in ".{0,8}", b in ".{0,8}") {
        prop_assert_eq!(join(JoinMode::None, &a, &b), format!("{a}{b}"));
    }

    #[test]
    fn space_join_separates(a in ".{0,8}", b in ".{0,8}") {
        prop_assert_eq!(join(JoinMode::Space, &a, &b), format!("{a} {b}"));
    }

    #[test]
    fn scheme_join_is_total(a in ".{0,8}", b in ".{0,8}") {
        let joined = join(JoinMode::Scheme, &a, &b);
        let base = a.len() + b.len();
        prop_assert!(joined.len() + 1 >= base && joined.len() <= base + 2);
    }
}
