use finite_relations::{category::*, error::RelationError, matrix::*, relation::*};

use super::strategy::{endorelation_strategy, parallel_relations_strategy, relation_strategy};
use crate::matrix::strategy::boolean_matrix_strategy;

use proptest::{prop_assert, prop_assert_eq, prop_assert_ne, proptest};

proptest! {
    #[test]
    fn decode_inverts_encode(r in relation_strategy()) {
        let m = r.to_matrix();
        prop_assert_eq!(m.dims(), (r.source(), r.target()));
        prop_assert!(m.is_boolean());
        prop_assert_eq!(m.entries().filter(|(_, _, &x)| x == 1).count(), r.len());
        prop_assert_eq!(Relation::from_matrix(&m), r);
    }

    #[test]
    fn encode_inverts_decode(m in boolean_matrix_strategy()) {
        prop_assert_eq!(Relation::from_matrix(&m).to_matrix(), m);
    }

    #[test]
    fn encoding_is_injective([r, q] in parallel_relations_strategy()) {
        if r == q {
            prop_assert_eq!(r.to_matrix(), q.to_matrix());
        } else {
            prop_assert_ne!(r.to_matrix(), q.to_matrix());
        }
    }

    #[test]
    fn converse_encodes_as_transpose(r in endorelation_strategy()) {
        prop_assert_eq!(r.converse().to_matrix(), r.to_matrix().transpose());
    }

    #[test]
    fn entries_match_membership(r in relation_strategy()) {
        let m = r.to_matrix();
        for (i, j, &x) in m.entries() {
            prop_assert_eq!(x == 1, r.contains(i + 1, j + 1));
        }
    }
}

#[test]
fn pairs_are_normalised() {
    let r = Relation::new([(3, 1), (1, 2), (3, 1), (2, 2)], 3, 3).unwrap();
    assert_eq!(r.pairs(), &[(1, 2), (2, 2), (3, 1)]);
    assert_eq!(r.len(), 3);
    assert_eq!(r, Relation::new([(2, 2), (1, 2), (3, 1)], 3, 3).unwrap());
}

#[test]
fn out_of_domain_pairs_are_rejected() {
    assert_eq!(
        Relation::new([(1, 4)], 3, 3),
        Err(RelationError::OutOfDomain {
            a: 1,
            b: 4,
            rows: 3,
            cols: 3
        })
    );
    assert!(Relation::new([(0, 1)], 3, 3).is_err());
}

#[test]
fn count_matrices_decode_by_support() {
    let counts = Matrix::from_rows(vec![vec![0u32, 2, 1], vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
    let r = Relation::from_matrix(&counts);
    assert_eq!(r.pairs(), &[(1, 2), (1, 3), (2, 1), (2, 3), (3, 2)]);
    assert_eq!(r, Relation::from_matrix(&counts.threshold()));
}

#[test]
fn matrix_rows_read_left_to_right() {
    let r = Relation::new([(1, 2), (2, 3), (3, 1)], 3, 3).unwrap();
    assert_eq!(
        r.to_matrix().to_rows(),
        vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]
    );
    assert_eq!(r.to_string(), "{(1,2), (2,3), (3,1)}");
}
