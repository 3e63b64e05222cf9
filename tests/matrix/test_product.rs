use finite_relations::{category::*, matrix::*, product::*};

use super::strategy::{
    arb_count_matrix, multipliable_matrices_strategy, square_boolean_matrix_strategy,
    three_multipliable_matrices_strategy,
};
use crate::relation::strategy::sizes;

use proptest::prelude::Strategy;
use proptest::{prop_assert, prop_assert_eq, proptest};

fn m(rows: Vec<Vec<u8>>) -> BooleanMatrix {
    Matrix::from_rows(rows).unwrap()
}

proptest! {
    #[test]
    fn product_associative([a, b, c] in three_multipliable_matrices_strategy()) {
        let ab_c = boolean_product(&boolean_product(&a, &b).unwrap(), &c).unwrap();
        let a_bc = boolean_product(&a, &boolean_product(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn identity_is_unit([a, _b] in multipliable_matrices_strategy()) {
        let left = BooleanMatrix::identity(a.rows());
        let right = BooleanMatrix::identity(a.cols());
        prop_assert_eq!(left.compose(&a).unwrap(), a.clone());
        prop_assert_eq!(a.compose(&right).unwrap(), a);
    }

    #[test]
    fn product_stays_boolean([a, b] in multipliable_matrices_strategy()) {
        let ab = boolean_product(&a, &b).unwrap();
        prop_assert_eq!(ab.dims(), (a.rows(), b.cols()));
        prop_assert!(ab.is_boolean());
    }

    #[test]
    fn thresholded_counts_give_boolean_product([a, b] in multipliable_matrices_strategy()) {
        let counts = count_product(&a.map(|&x| u32::from(x)), &b.map(|&x| u32::from(x))).unwrap();
        let boolean = boolean_product(&a, &b).unwrap();
        prop_assert_eq!(counts.threshold(), boolean.map(|&x| u32::from(x)));
    }

    #[test]
    fn boolean_product_ignores_multiplicity(
        (a, b) in (sizes(), sizes(), sizes())
            .prop_flat_map(|(m, n, p)| (arb_count_matrix(m, n), arb_count_matrix(n, p)))
    ) {
        prop_assert_eq!(
            boolean_product(&a, &b).unwrap(),
            boolean_product(&a.threshold(), &b.threshold()).unwrap()
        );
    }

    #[test]
    fn transpose_reverses_product([a, b] in multipliable_matrices_strategy()) {
        let ab = boolean_product(&a, &b).unwrap();
        let bt_at = boolean_product(&b.converse(), &a.converse()).unwrap();
        prop_assert_eq!(ab.transpose(), bt_at);
    }

    #[test]
    fn cells_match_product([a, b] in multipliable_matrices_strategy()) {
        let ab = boolean_product(&a, &b).unwrap();
        for (i, j, &x) in ab.entries() {
            let calc = cell_calculation(&a, &b, i, j).unwrap();
            prop_assert_eq!(calc.terms.len(), a.cols());
            prop_assert_eq!(calc.value(), x == 1);
            prop_assert_eq!(calc.witnesses().next().is_some(), x == 1);
        }
    }

    #[test]
    fn square_is_second_power(a in square_boolean_matrix_strategy()) {
        let square = boolean_product(&a, &a).unwrap();
        prop_assert_eq!(boolean_power(&a, 2).unwrap(), square.clone());
        prop_assert_eq!(boolean_power(&a, 3).unwrap(), boolean_product(&square, &a).unwrap());
        prop_assert_eq!(boolean_power(&a, 1).unwrap(), a);
    }
}

#[test]
fn all_ones_product() {
    let a = m(vec![vec![1, 0, 1], vec![0, 1, 1], vec![1, 1, 0]]);
    let b = m(vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]);
    assert_eq!(boolean_product(&a, &b).unwrap(), Matrix::filled(3, 3, 1));
}

#[test]
fn mismatched_dimensions() {
    let a = m(vec![vec![1, 0, 1]]);
    assert!(boolean_product(&a, &a).is_none());
    assert!(count_product(&a, &a).is_none());
    assert!(cell_calculation(&a, &a, 0, 0).is_err());
    assert!(boolean_power(&a, 2).is_none());
}

#[test]
fn cell_out_of_range() {
    let a = m(vec![vec![1, 0], vec![0, 1]]);
    assert!(cell_calculation(&a, &a, 2, 0).is_err());
}

#[test]
fn ragged_rows_are_rejected() {
    assert!(Matrix::from_rows(vec![vec![1u8, 0], vec![1]]).is_err());
}

#[test]
fn step_by_step_cell() {
    let a = m(vec![vec![1, 0, 1], vec![0, 1, 1], vec![1, 1, 0]]);
    let b = m(vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]);
    let calc = cell_calculation(&a, &b, 0, 1).unwrap();
    assert_eq!(calc.to_string(), "(1∧1) ∨ (0∧1) ∨ (1∧0) = 1");
    assert_eq!(calc.witnesses().collect::<Vec<_>>(), vec![0]);
}
