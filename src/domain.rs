//! The finite set `{1..N}` that relations are drawn over.
use crate::error::{RelationError, Result};

use std::fmt;

/// The set `{1, 2, ..., size}`.
///
/// Elements are 1-indexed; the matching matrix row or column is `element - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Domain {
    size: usize,
}

impl Domain {
    /// A non-empty domain `{1..size}`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(RelationError::EmptyDomain);
        }
        Ok(Self { size })
    }

    /// For built-in presets, whose sizes are non-zero literals.
    pub(crate) const fn preset(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize) -> bool {
        (1..=self.size).contains(&x)
    }

    /// The elements in ascending order.
    pub fn elements(&self) -> impl Iterator<Item = usize> {
        1..=self.size
    }

    /// The 0-based matrix index of `x`, if `x` is an element.
    pub fn index_of(&self, x: usize) -> Option<usize> {
        self.contains(x).then(|| x - 1)
    }

    /// Every pair of `self × self`, ordered lexicographically.
    ///
    /// ```rust
    /// # use finite_relations::domain::Domain;
    /// let d = Domain::new(2).unwrap();
    /// assert_eq!(d.pairs().collect::<Vec<_>>(), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    /// ```
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.size;
        (1..=n).flat_map(move |a| (1..=n).map(move |b| (a, b)))
    }
}

impl TryFrom<usize> for Domain {
    type Error = RelationError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<Domain> for usize {
    fn from(d: Domain) -> usize {
        d.size
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for x in self.elements() {
            if x > 1 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "}}")
    }
}
