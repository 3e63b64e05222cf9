use crate::category::*;
use crate::domain::Domain;
use crate::error::{RelationError, Result};
use crate::matrix::Matrix;

use core::fmt;
use core::ops::Shr;
use num_traits::Zero;

/// An ordered pair `(a, b)` of 1-indexed elements.
pub type Pair = (usize, usize);

/// A relation `R ⊆ {1..source} × {1..target}`.
///
/// Pairs are kept sorted by `(a, b)` and deduplicated, so two relations are equal exactly when
/// they contain the same pairs.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawRelation", into = "RawRelation")]
pub struct Relation {
    pairs: Vec<Pair>,
    source: usize,
    target: usize,
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct RawRelation {
    source: usize,
    target: usize,
    pairs: Vec<Pair>,
}

impl TryFrom<RawRelation> for Relation {
    type Error = RelationError;

    fn try_from(raw: RawRelation) -> Result<Self> {
        Relation::new(raw.pairs, raw.source, raw.target)
    }
}

impl From<Relation> for RawRelation {
    fn from(r: Relation) -> Self {
        RawRelation {
            source: r.source,
            target: r.target,
            pairs: r.pairs,
        }
    }
}

impl Relation {
    /// Construct a relation from pairs, rejecting any pair outside `{1..source} × {1..target}`.
    ///
    /// Duplicates are dropped and the pairs sorted.
    ///
    /// ```rust
    /// # use finite_relations::relation::*;
    /// let r = Relation::new([(2, 1), (1, 3), (2, 1)], 3, 3).unwrap();
    /// assert_eq!(r.pairs(), &[(1, 3), (2, 1)]);
    /// assert!(Relation::new([(4, 1)], 3, 3).is_err());
    /// ```
    pub fn new(
        pairs: impl IntoIterator<Item = Pair>,
        source: usize,
        target: usize,
    ) -> Result<Self> {
        let pairs: Vec<Pair> = pairs.into_iter().collect();
        if let Some(&(a, b)) = pairs
            .iter()
            .find(|(a, b)| !(1..=source).contains(a) || !(1..=target).contains(b))
        {
            return Err(RelationError::OutOfDomain {
                a,
                b,
                rows: source,
                cols: target,
            });
        }
        Ok(Self::from_parts(pairs, source, target))
    }

    /// A relation on a single set, `R ⊆ A × A`.
    pub fn on(domain: Domain, pairs: impl IntoIterator<Item = Pair>) -> Result<Self> {
        Self::new(pairs, domain.size(), domain.size())
    }

    /// The empty relation `∅ ⊆ {1..source} × {1..target}`.
    pub fn empty(source: usize, target: usize) -> Self {
        Self {
            pairs: Vec::new(),
            source,
            target,
        }
    }

    /// Normalise pairs already known to be in range.
    pub(crate) fn from_parts(mut pairs: Vec<Pair>, source: usize, target: usize) -> Self {
        pairs.sort_unstable();
        pairs.dedup();
        Self {
            pairs,
            source,
            target,
        }
    }

    /// Decode a matrix, treating every non-zero entry `[i][j]` as the pair `(i+1, j+1)`.
    pub fn from_matrix<T: Zero>(m: &Matrix<T>) -> Self {
        let pairs = m
            .entries()
            .filter(|(_, _, x)| !x.is_zero())
            .map(|(i, j, _)| (i + 1, j + 1))
            .collect();
        // entries() is row-major, so pairs arrive already sorted and distinct.
        Self {
            pairs,
            source: m.rows(),
            target: m.cols(),
        }
    }

    /// Encode as a 0/1 adjacency matrix.
    pub fn to_matrix(&self) -> Matrix<u8> {
        Matrix::from_relation(self)
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when source and target are the same set.
    pub fn is_endorelation(&self) -> bool {
        self.source == self.target
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pairs.binary_search(&(a, b)).is_ok()
    }

    /// The elements `b` with `(a, b) ∈ R`, ascending.
    pub fn successors(&self, a: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.pairs.partition_point(|&(x, _)| x < a);
        self.pairs[start..]
            .iter()
            .take_while(move |&&(x, _)| x == a)
            .map(|&(_, b)| b)
    }

    /// The elements `a` with `(a, b) ∈ R`, ascending.
    pub fn predecessors(&self, b: usize) -> impl Iterator<Item = usize> + '_ {
        self.pairs
            .iter()
            .filter(move |&&(_, y)| y == b)
            .map(|&(a, _)| a)
    }
}

impl Arrow for Relation {
    type Object = usize;

    fn source(&self) -> Self::Object {
        self.source
    }

    fn target(&self) -> Self::Object {
        self.target
    }

    /// The diagonal `{(x, x) | x ∈ {1..a}}`.
    fn identity(a: Self::Object) -> Self {
        Self {
            pairs: (1..=a).map(|x| (x, x)).collect(),
            source: a,
            target: a,
        }
    }

    fn compose(&self, other: &Self) -> Option<Self> {
        crate::compose::compose(self, other)
    }
}

impl Converse for Relation {
    fn converse(&self) -> Self {
        let pairs = self.pairs.iter().map(|&(a, b)| (b, a)).collect();
        Self::from_parts(pairs, self.target, self.source)
    }
}

// Syntactic sugar for relational composition
impl Shr<&Relation> for &Relation {
    type Output = Option<Relation>;

    fn shr(self, rhs: &Relation) -> Option<Relation> {
        self.compose(rhs)
    }
}

impl<'a> IntoIterator for &'a Relation {
    type Item = &'a Pair;
    type IntoIter = core::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Set notation: `{(1,2), (2,3)}`.
impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (a, b)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({a},{b})")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("pairs", &self.pairs)
            .field("source", &self.source)
            .field("target", &self.target)
            .finish()
    }
}
