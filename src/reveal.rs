//! Cell-by-cell exploration of a Boolean product.
//!
//! [`ProductReveal`] starts with every cell of `A ⊙ B` hidden and reveals one worked cell per
//! click. [`PathHighlight`] shows, for a selected cell of `M_R ⊙ M_S`, which edges of `R` and
//! `S` could join up through each intermediate element.
use crate::category::*;
use crate::error::{RelationError, Result};
use crate::matrix::{BooleanMatrix, Matrix};
use crate::product::{cell_calculation, CellCalculation};
use crate::relation::Relation;
use crate::storyboard::Side;

#[derive(Clone, Debug)]
pub struct ProductReveal {
    a: BooleanMatrix,
    b: BooleanMatrix,
    cells: Vec<Option<CellCalculation>>,
    selected: Option<(usize, usize)>,
}

impl ProductReveal {
    pub fn new(a: BooleanMatrix, b: BooleanMatrix) -> Result<Self> {
        if a.cols() != b.rows() {
            return Err(RelationError::DimensionMismatch {
                expected: (a.cols(), b.cols()),
                found: b.dims(),
            });
        }
        let cells = vec![None; a.rows() * b.cols()];
        Ok(Self {
            a,
            b,
            cells,
            selected: None,
        })
    }

    /// Explore `M_R ⊙ M_S`.
    pub fn from_relations(r: &Relation, s: &Relation) -> Result<Self> {
        Self::new(r.to_matrix(), s.to_matrix())
    }

    pub fn left(&self) -> &BooleanMatrix {
        &self.a
    }

    pub fn right(&self) -> &BooleanMatrix {
        &self.b
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.a.rows(), self.b.cols())
    }

    fn slot(&self, row: usize, col: usize) -> Result<usize> {
        let (rows, cols) = self.dims();
        if row >= rows || col >= cols {
            return Err(RelationError::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(row * cols + col)
    }

    /// Reveal and select cell `(row, col)` (0-based).
    ///
    /// Returns `Ok(false)` without recomputing if the cell was already revealed.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<bool> {
        let slot = self.slot(row, col)?;
        if self.cells[slot].is_some() {
            return Ok(false);
        }
        let calc = cell_calculation(&self.a, &self.b, row, col)?;
        tracing::debug!(row, col, value = calc.value(), "revealed product cell");
        self.cells[slot] = Some(calc);
        self.selected = Some((row, col));
        Ok(true)
    }

    /// Reveal every cell still hidden.
    pub fn reveal_all(&mut self) -> Result<()> {
        let (rows, cols) = self.dims();
        for i in 0..rows {
            for j in 0..cols {
                self.reveal(i, j)?;
            }
        }
        Ok(())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellCalculation> {
        self.slot(row, col)
            .ok()
            .and_then(|slot| self.cells[slot].as_ref())
    }

    pub fn selected(&self) -> Option<&CellCalculation> {
        self.selected.and_then(|(i, j)| self.cell(i, j))
    }

    pub fn revealed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The product as far as revealed: `None` for hidden cells.
    pub fn view(&self) -> Matrix<Option<u8>> {
        let (rows, cols) = self.dims();
        Matrix::from_fn(rows, cols, |i, j| {
            self.cells[i * cols + j]
                .as_ref()
                .map(|c| u8::from(c.value()))
        })
    }

    /// Hide every cell again.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.selected = None;
    }

    /// Replace both factors and hide everything.
    pub fn regenerate(&mut self, a: BooleanMatrix, b: BooleanMatrix) -> Result<()> {
        *self = Self::new(a, b)?;
        Ok(())
    }
}

/// How to draw a candidate edge for the selected cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeStyle {
    /// The edge exists and leaves the selected row (in `R`) or enters the selected column (in `S`).
    Solid,
    /// The edge would be on a path for the selected cell but is absent.
    Dotted,
    /// Not relevant to the selected cell.
    Hidden,
}

/// One intermediate element `k` for the selected cell `(i, j)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Candidate {
    pub via: usize,
    /// `(i, k) ∈ R`
    pub left: bool,
    /// `(k, j) ∈ S`
    pub right: bool,
}

impl Candidate {
    pub fn completes(&self) -> bool {
        self.left && self.right
    }
}

#[derive(Clone, Debug)]
pub struct PathHighlight {
    r: Relation,
    s: Relation,
    selected: Option<(usize, usize)>,
}

impl PathHighlight {
    pub fn new(r: Relation, s: Relation) -> Result<Self> {
        if r.target() != s.source() {
            return Err(RelationError::DimensionMismatch {
                expected: (r.target(), s.target()),
                found: (s.source(), s.target()),
            });
        }
        Ok(Self {
            r,
            s,
            selected: None,
        })
    }

    /// Select matrix cell `(row, col)` (0-based).
    pub fn select(&mut self, row: usize, col: usize) -> Result<()> {
        if row >= self.r.source() || col >= self.s.target() {
            return Err(RelationError::CellOutOfBounds {
                row,
                col,
                rows: self.r.source(),
                cols: self.s.target(),
            });
        }
        self.selected = Some((row, col));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    /// Every intermediate for the selected cell, ascending; empty when nothing is selected.
    pub fn candidates(&self) -> Vec<Candidate> {
        let Some((i, j)) = self.selected else {
            return Vec::new();
        };
        (1..=self.r.target())
            .map(|via| Candidate {
                via,
                left: self.r.contains(i + 1, via),
                right: self.s.contains(via, j + 1),
            })
            .collect()
    }

    /// Style of the candidate edge `from → to` of `R` (left) or `S` (right), 1-indexed.
    pub fn edge_style(&self, side: Side, from: usize, to: usize) -> EdgeStyle {
        let Some((i, j)) = self.selected else {
            return EdgeStyle::Hidden;
        };
        let (relevant, present) = match side {
            Side::Left => (from == i + 1, self.r.contains(from, to)),
            Side::Right => (to == j + 1, self.s.contains(from, to)),
        };
        match (relevant, present) {
            (false, _) => EdgeStyle::Hidden,
            (true, true) => EdgeStyle::Solid,
            (true, false) => EdgeStyle::Dotted,
        }
    }
}
