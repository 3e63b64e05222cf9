use finite_relations::{category::*, compose::*, relation::*};

use super::strategy::{
    composable_relations_strategy, mismatched_relations_strategy, relation_strategy,
    three_composable_relations_strategy,
};

use proptest::{prop_assert, prop_assert_eq, proptest};

fn rel(pairs: &[Pair], n: usize) -> Relation {
    Relation::new(pairs.iter().copied(), n, n).unwrap()
}

proptest! {
    #[test]
    fn category_identity_left(r in relation_strategy()) {
        let id = Relation::identity(r.source());
        prop_assert!(id.compose(&r).is_some_and(|composed| composed == r));
    }

    #[test]
    fn category_identity_right(r in relation_strategy()) {
        let id = Relation::identity(r.target());
        prop_assert!(r.compose(&id).is_some_and(|composed| composed == r));
    }

    #[test]
    fn composition_associative([r, s, t] in three_composable_relations_strategy()) {
        let rs_t = r.compose(&s)
            .expect("By construction composible")
            .compose(&t)
            .expect("By construction composible");
        let r_st = r.compose(
            &s.compose(&t)
                .expect("By construction composible"))
            .expect("By construction composible");
        prop_assert_eq!(rs_t, r_st);
    }

    #[test]
    fn compose_agrees_with_matrix_product([r, s] in composable_relations_strategy()) {
        let direct = compose(&r, &s).expect("By construction composible");
        let via_matrix = compose_via_matrix(&r, &s).expect("By construction composible");
        prop_assert_eq!(direct.source(), r.source());
        prop_assert_eq!(direct.target(), s.target());
        prop_assert_eq!(direct, via_matrix);
    }

    #[test]
    fn composite_pairs_have_witnesses([r, s] in composable_relations_strategy()) {
        let rs = (&r >> &s).expect("By construction composible");
        for (a, c) in rs.iter() {
            let via = witnesses(&r, &s, a, c);
            prop_assert!(!via.is_empty());
            for b in via {
                prop_assert!(r.contains(a, b) && s.contains(b, c));
            }
        }
        let from_paths: Vec<Pair> = paths(&r, &s).iter().map(Path::pair).collect();
        prop_assert_eq!(Relation::new(from_paths, r.source(), s.target()).unwrap(), rs);
    }

    #[test]
    fn mismatched_types_do_not_compose([r, s] in mismatched_relations_strategy()) {
        prop_assert!(r.compose(&s).is_none());
        prop_assert!(compose_via_matrix(&r, &s).is_none());
    }

    #[test]
    fn converse_is_involutive(r in relation_strategy()) {
        prop_assert_eq!(r.converse().converse(), r.clone());
        prop_assert_eq!(r.converse().source(), r.target());
    }

    #[test]
    fn converse_reverses_composition([r, s] in composable_relations_strategy()) {
        let rs = r.compose(&s).expect("By construction composible");
        let sr = s.converse().compose(&r.converse()).expect("By construction composible");
        prop_assert_eq!(rs.converse(), sr);
    }
}

#[test]
fn composition_is_not_commutative() {
    let r = rel(&[(1, 1), (2, 3), (3, 2)], 3);
    let s = rel(&[(1, 2), (2, 1), (3, 3)], 3);
    let rs = compose(&r, &s).unwrap();
    let sr = compose(&s, &r).unwrap();
    assert_eq!(rs, rel(&[(1, 2), (2, 3), (3, 1)], 3));
    assert_eq!(sr, rel(&[(1, 1), (2, 2), (3, 3)], 3));
    assert_ne!(rs, sr);
}

#[test]
fn composing_edges_lie_on_paths() {
    let r = rel(&[(1, 2), (2, 3), (3, 4)], 4);
    let s = rel(&[(2, 1), (4, 4)], 4);
    let edges = ComposingEdges::new(&r, &s);
    assert_eq!(edges.left.pairs(), &[(1, 2), (3, 4)]);
    assert_eq!(edges.right.pairs(), &[(2, 1), (4, 4)]);
    assert_eq!(
        paths(&r, &s),
        vec![
            Path { from: 1, via: 2, to: 1 },
            Path { from: 3, via: 4, to: 4 },
        ]
    );
}

#[test]
fn empty_relation_composes_to_empty() {
    let r = Relation::empty(3, 3);
    let s = rel(&[(1, 1), (2, 2)], 3);
    assert!(compose(&r, &s).unwrap().is_empty());
    assert!(compose(&s, &r).unwrap().is_empty());
}
