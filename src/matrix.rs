//! Dense row-major matrices, and the codec between relations and 0/1 adjacency matrices.
use crate::category::*;
use crate::error::{RelationError, Result};
use crate::relation::Relation;

use core::fmt;
use core::ops::Index;
use num_traits::{One, Zero};

/// A `rows × cols` matrix stored in row-major order.
///
/// Boolean matrices use entries in `{0, 1}` (see [`BooleanMatrix`]); path-count matrices may
/// hold any numeric type. Serialises as a list of rows.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(
        serialize = "T: serde::Serialize + Clone",
        deserialize = "T: serde::Deserialize<'de>"
    )
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// A matrix whose entries are `0` or `1`.
pub type BooleanMatrix = Matrix<u8>;

impl<T> Matrix<T> {
    /// Build a matrix from its rows, which must all have the same length.
    ///
    /// ```rust
    /// # use finite_relations::matrix::*;
    /// let m = Matrix::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
    /// assert_eq!(m.dims(), (2, 2));
    /// assert!(Matrix::from_rows(vec![vec![1, 0], vec![1]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * m);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != m {
                return Err(RelationError::RaggedRows {
                    row,
                    expected: m,
                    found: r.len(),
                });
            }
            data.extend(r);
        }
        Ok(Self {
            rows: n,
            cols: m,
            data,
        })
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        (i < self.rows && j < self.cols).then(|| &self.data[i * self.cols + j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(self.out_of_bounds(i, j));
        }
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// If `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Column `j`, top to bottom. Empty when `j >= self.cols()`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &T> + '_ {
        let rows = if j < self.cols { self.rows } else { 0 };
        self.data.iter().skip(j).step_by(self.cols.max(1)).take(rows)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Every cell as `(i, j, &value)` in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(n, x)| (n / cols, n % cols, x))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub(crate) fn out_of_bounds(&self, row: usize, col: usize) -> RelationError {
        RelationError::CellOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> Matrix<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i].clone())
    }
}

impl<T: Zero + Clone> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }
}

impl<T: Zero + One + Clone> Matrix<T> {
    /// The adjacency matrix of `r`: entry `[a-1][b-1]` is one exactly when `(a, b) ∈ r`.
    ///
    /// ```rust
    /// # use finite_relations::{matrix::*, relation::*};
    /// let r = Relation::new([(1, 2), (2, 3)], 3, 3).unwrap();
    /// let m: BooleanMatrix = Matrix::from_relation(&r);
    /// assert_eq!(m.to_rows(), vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
    /// ```
    pub fn from_relation(r: &Relation) -> Self {
        let mut m = Self::zeros(r.source(), r.target());
        for (a, b) in r.iter() {
            m.data[(a - 1) * m.cols + (b - 1)] = T::one();
        }
        m
    }

    /// Map every non-zero entry to one.
    pub fn threshold(&self) -> Self {
        self.map(|x| if x.is_zero() { T::zero() } else { T::one() })
    }
}

impl<T: Zero + One + PartialEq> Matrix<T> {
    /// True if every entry is zero or one.
    pub fn is_boolean(&self) -> bool {
        let one = T::one();
        self.data.iter().all(|x| x.is_zero() || *x == one)
    }
}

impl<T: Zero + One + Clone> Arrow for Matrix<T> {
    type Object = usize;

    fn source(&self) -> Self::Object {
        self.rows
    }

    fn target(&self) -> Self::Object {
        self.cols
    }

    fn identity(a: Self::Object) -> Self {
        Self::from_fn(a, a, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// The Boolean product `self ⊙ other`.
    fn compose(&self, other: &Self) -> Option<Self> {
        crate::product::boolean_product(self, other)
    }
}

impl<T: Zero + One + Clone> Converse for Matrix<T> {
    fn converse(&self) -> Self {
        self.transpose()
    }
}

/// Index by `(row, col)`.
///
/// # Panics
///
/// If the cell is out of range.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "cell ({i},{j}) out of range");
        &self.data[i * self.cols + j]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = RelationError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Clone> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_rows()
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

/// One bracketed row per line: `[1 0 1]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{x}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
