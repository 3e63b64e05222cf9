//! Boolean (OR-of-ANDs) and path-count matrix products.
use crate::error::{RelationError, Result};
use crate::matrix::Matrix;

use core::fmt;
use core::ops::Mul;
use num_traits::{One, Zero};

/// The Boolean product `a ⊙ b`: entry `[i][j]` is one iff `a[i][k] ∧ b[k][j]` for some `k`.
///
/// Non-zero entries count as true, so path-count matrices may be passed in directly.
/// Returns `None` unless `a.cols() == b.rows()`.
///
/// ```rust
/// # use finite_relations::{matrix::*, product::*};
/// let a = Matrix::from_rows(vec![vec![1u8, 0, 1], vec![0, 1, 1], vec![1, 1, 0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![1u8, 1, 0], vec![0, 1, 1], vec![1, 0, 1]]).unwrap();
/// let ab = boolean_product(&a, &b).unwrap();
/// assert_eq!(ab, Matrix::filled(3, 3, 1));
/// ```
pub fn boolean_product<T: Zero + One + Clone>(a: &Matrix<T>, b: &Matrix<T>) -> Option<Matrix<T>> {
    if a.cols() != b.rows() {
        return None;
    }
    Some(Matrix::from_fn(a.rows(), b.cols(), |i, j| {
        // `any` stops at the first true term.
        let hit = (0..a.cols()).any(|k| !a[(i, k)].is_zero() && !b[(k, j)].is_zero());
        if hit {
            T::one()
        } else {
            T::zero()
        }
    }))
}

/// The ordinary product `a · b`; for 0/1 inputs entry `[i][j]` counts the paths `i → k → j`.
///
/// Thresholding the result gives [`boolean_product`].
///
/// ```rust
/// # use finite_relations::{matrix::*, product::*};
/// let r = Matrix::from_rows(vec![vec![1u32, 0, 1], vec![0, 1, 0], vec![1, 0, 0]]).unwrap();
/// let s = Matrix::from_rows(vec![vec![0u32, 1, 0], vec![1, 0, 1], vec![0, 1, 1]]).unwrap();
/// let counts = count_product(&r, &s).unwrap();
/// assert_eq!(counts.to_rows(), vec![vec![0, 2, 1], vec![1, 0, 1], vec![0, 1, 0]]);
/// ```
pub fn count_product<T>(a: &Matrix<T>, b: &Matrix<T>) -> Option<Matrix<T>>
where
    T: Zero + Clone + Mul<Output = T>,
{
    if a.cols() != b.rows() {
        return None;
    }
    Some(Matrix::from_fn(a.rows(), b.cols(), |i, j| {
        (0..a.cols()).fold(T::zero(), |acc, k| {
            acc + a[(i, k)].clone() * b[(k, j)].clone()
        })
    }))
}

/// The Boolean power `a ⊙ a ⊙ ... ⊙ a` (`n` factors).
///
/// Returns `None` if `a` is not square or `n == 0`.
pub fn boolean_power<T: Zero + One + Clone>(a: &Matrix<T>, n: usize) -> Option<Matrix<T>> {
    if !a.is_square() || n == 0 {
        return None;
    }
    let mut acc = a.threshold();
    for _ in 1..n {
        acc = boolean_product(&acc, a)?;
    }
    Some(acc)
}

/// One term `a[i][k] ∧ b[k][j]` of a Boolean product cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellTerm {
    pub k: usize,
    pub left: bool,
    pub right: bool,
}

impl CellTerm {
    pub fn value(&self) -> bool {
        self.left && self.right
    }
}

/// The worked calculation of one cell of `a ⊙ b`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellCalculation {
    pub row: usize,
    pub col: usize,
    pub terms: Vec<CellTerm>,
}

impl CellCalculation {
    /// The OR of every term.
    pub fn value(&self) -> bool {
        self.terms.iter().any(CellTerm::value)
    }

    /// The indices `k` whose term is true.
    pub fn witnesses(&self) -> impl Iterator<Item = usize> + '_ {
        self.terms.iter().filter(|t| t.value()).map(|t| t.k)
    }
}

/// Renders as `(1∧0) ∨ (0∧1) ∨ (1∧1) = 1`.
impl fmt::Display for CellCalculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, t) in self.terms.iter().enumerate() {
            if n > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "({}∧{})", u8::from(t.left), u8::from(t.right))?;
        }
        write!(f, " = {}", u8::from(self.value()))
    }
}

/// Work out cell `(row, col)` of `a ⊙ b` term by term (0-based indices).
pub fn cell_calculation<T: Zero>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    row: usize,
    col: usize,
) -> Result<CellCalculation> {
    if a.cols() != b.rows() {
        return Err(RelationError::DimensionMismatch {
            expected: (a.cols(), b.cols()),
            found: b.dims(),
        });
    }
    if row >= a.rows() || col >= b.cols() {
        return Err(RelationError::CellOutOfBounds {
            row,
            col,
            rows: a.rows(),
            cols: b.cols(),
        });
    }
    let terms = (0..a.cols())
        .map(|k| CellTerm {
            k,
            left: !a[(row, k)].is_zero(),
            right: !b[(k, col)].is_zero(),
        })
        .collect();
    Ok(CellCalculation { row, col, terms })
}
