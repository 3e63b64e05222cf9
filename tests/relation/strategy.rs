use finite_relations::relation::*;

use proptest::collection::vec;
use proptest::prelude::{any, Strategy};

const MAX_SIZE: usize = 6;

pub(crate) fn sizes() -> impl Strategy<Value = usize> {
    1..=MAX_SIZE
}

/// Any subset of `{1..source} × {1..target}`, each pair included with probability 1/2.
pub fn arb_relation(source: usize, target: usize) -> impl Strategy<Value = Relation> {
    vec(any::<bool>(), source * target).prop_map(move |bits| {
        let pairs = bits
            .iter()
            .enumerate()
            .filter(|(_, &keep)| keep)
            .map(|(i, _)| (i / target + 1, i % target + 1));
        Relation::new(pairs, source, target).unwrap()
    })
}

pub fn relation_strategy() -> impl Strategy<Value = Relation> {
    (sizes(), sizes()).prop_flat_map(|(s, t)| arb_relation(s, t))
}

/// A relation on one set.
pub fn endorelation_strategy() -> impl Strategy<Value = Relation> {
    sizes().prop_flat_map(|n| arb_relation(n, n))
}

/// Two relations of the same type.
pub fn parallel_relations_strategy() -> impl Strategy<Value = [Relation; 2]> {
    (sizes(), sizes()).prop_flat_map(|(s, t)| {
        (arb_relation(s, t), arb_relation(s, t)).prop_map(|(r, q)| [r, q])
    })
}

/// `r : A → B` and `s : B → C`.
pub fn composable_relations_strategy() -> impl Strategy<Value = [Relation; 2]> {
    (sizes(), sizes(), sizes()).prop_flat_map(|(a, b, c)| {
        (arb_relation(a, b), arb_relation(b, c)).prop_map(|(r, s)| [r, s])
    })
}

pub fn three_composable_relations_strategy() -> impl Strategy<Value = [Relation; 3]> {
    (sizes(), sizes(), sizes(), sizes()).prop_flat_map(|(a, b, c, d)| {
        (arb_relation(a, b), arb_relation(b, c), arb_relation(c, d))
            .prop_map(|(r, s, t)| [r, s, t])
    })
}

/// `r : A → B` and `s : C → D` with `B ≠ C`.
pub fn mismatched_relations_strategy() -> impl Strategy<Value = [Relation; 2]> {
    (sizes(), sizes(), sizes(), sizes())
        .prop_filter("middle sets must differ", |(_, b, c, _)| b != c)
        .prop_flat_map(|(a, b, c, d)| {
            (arb_relation(a, b), arb_relation(c, d)).prop_map(|(r, s)| [r, s])
        })
}
