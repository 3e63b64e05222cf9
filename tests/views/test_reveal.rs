use finite_relations::{
    error::RelationError, matrix::*, product::boolean_product, relation::Relation, reveal::*,
    storyboard::Side,
};

use crate::matrix::strategy::multipliable_matrices_strategy;

use proptest::{prop_assert, prop_assert_eq, proptest};

fn m(rows: Vec<Vec<u8>>) -> BooleanMatrix {
    Matrix::from_rows(rows).unwrap()
}

proptest! {
    #[test]
    fn reveal_all_gives_product([a, b] in multipliable_matrices_strategy()) {
        let expected = boolean_product(&a, &b).unwrap();
        let mut reveal = ProductReveal::new(a, b).unwrap();
        prop_assert_eq!(reveal.revealed(), 0);
        reveal.reveal_all().unwrap();
        prop_assert!(reveal.is_complete());
        prop_assert_eq!(reveal.view().map(|&c| c.unwrap_or(9)), expected);
    }

    #[test]
    fn second_reveal_is_noop([a, b] in multipliable_matrices_strategy()) {
        let mut reveal = ProductReveal::new(a, b).unwrap();
        prop_assert!(reveal.reveal(0, 0).unwrap());
        let first = reveal.cell(0, 0).cloned();
        prop_assert!(!reveal.reveal(0, 0).unwrap());
        prop_assert_eq!(reveal.revealed(), 1);
        prop_assert_eq!(reveal.cell(0, 0).cloned(), first);
    }
}

#[test]
fn hidden_cells_stay_hidden() {
    let a = m(vec![vec![1, 0], vec![0, 1]]);
    let b = m(vec![vec![0, 1], vec![1, 1]]);
    let mut reveal = ProductReveal::new(a, b).unwrap();
    reveal.reveal(1, 0).unwrap();
    assert_eq!(reveal.selected().map(|c| (c.row, c.col)), Some((1, 0)));
    assert_eq!(
        reveal.view().to_rows(),
        vec![vec![None, None], vec![Some(1), None]]
    );
    assert!(!reveal.is_complete());
    assert!(reveal.cell(0, 0).is_none());
}

#[test]
fn out_of_range_cells_are_errors() {
    let a = m(vec![vec![1, 0], vec![0, 1]]);
    let mut reveal = ProductReveal::new(a.clone(), a).unwrap();
    assert_eq!(
        reveal.reveal(2, 0),
        Err(RelationError::CellOutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        })
    );
    assert_eq!(reveal.revealed(), 0);
}

#[test]
fn reset_and_regenerate_hide_everything() {
    let a = m(vec![vec![1, 1], vec![0, 1]]);
    let mut reveal = ProductReveal::new(a.clone(), a.clone()).unwrap();
    reveal.reveal_all().unwrap();
    reveal.reset();
    assert_eq!(reveal.revealed(), 0);
    assert!(reveal.selected().is_none());

    reveal.reveal(0, 1).unwrap();
    let b = m(vec![vec![0, 0], vec![1, 0]]);
    reveal.regenerate(a, b.clone()).unwrap();
    assert_eq!(reveal.revealed(), 0);
    assert_eq!(reveal.right(), &b);
}

#[test]
fn mismatched_factors_are_refused() {
    let a = m(vec![vec![1, 0, 1]]);
    assert!(ProductReveal::new(a.clone(), a).is_err());
}

#[test]
fn path_highlight_styles() {
    let r = Relation::new([(1, 2), (1, 3)], 3, 3).unwrap();
    let s = Relation::new([(2, 1), (3, 3)], 3, 3).unwrap();
    let mut h = PathHighlight::new(r, s).unwrap();
    assert!(h.candidates().is_empty());
    assert_eq!(h.edge_style(Side::Left, 1, 2), EdgeStyle::Hidden);

    // cell (1,1) of M_R ⊙ M_S
    h.select(0, 0).unwrap();
    let completes: Vec<usize> = h
        .candidates()
        .iter()
        .filter(|c| c.completes())
        .map(|c| c.via)
        .collect();
    assert_eq!(completes, vec![2]);
    assert_eq!(h.candidates().len(), 3);

    assert_eq!(h.edge_style(Side::Left, 1, 2), EdgeStyle::Solid);
    assert_eq!(h.edge_style(Side::Left, 1, 1), EdgeStyle::Dotted);
    assert_eq!(h.edge_style(Side::Left, 2, 1), EdgeStyle::Hidden);
    assert_eq!(h.edge_style(Side::Right, 2, 1), EdgeStyle::Solid);
    assert_eq!(h.edge_style(Side::Right, 3, 1), EdgeStyle::Dotted);
    assert_eq!(h.edge_style(Side::Right, 3, 3), EdgeStyle::Hidden);

    assert!(h.select(3, 0).is_err());
    assert_eq!(h.selected(), Some((0, 0)));
    h.clear();
    assert!(h.selected().is_none());
}
