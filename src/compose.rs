//! Relational composition computed directly on pair sets.
//!
//! `R ∘ S = {(a,c) | ∃b: (a,b) ∈ R ∧ (b,c) ∈ S}` in diagrammatic order: first `R`, then `S`.
//! [`compose`] never goes through matrices; [`compose_via_matrix`] computes the same relation
//! through the Boolean product so the two can be checked against each other.
use crate::category::*;
use crate::matrix::BooleanMatrix;
use crate::product::boolean_product;
use crate::relation::{Pair, Relation};

/// A path `from → via → to` through the middle set.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Path {
    pub from: usize,
    pub via: usize,
    pub to: usize,
}

impl Path {
    /// The composed pair `(from, to)`.
    pub fn pair(&self) -> Pair {
        (self.from, self.to)
    }
}

impl core::fmt::Display for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}→{}→{}", self.from, self.via, self.to)
    }
}

/// Compose `r : A → B` with `s : B → C`.
///
/// Returns `None` if `r.target() != s.source()`.
///
/// ```rust
/// # use finite_relations::{compose::*, relation::*};
/// let r = Relation::new([(1, 1), (2, 3), (3, 2)], 3, 3).unwrap();
/// let s = Relation::new([(1, 2), (2, 1), (3, 3)], 3, 3).unwrap();
/// assert_eq!(compose(&r, &s).unwrap().pairs(), &[(1, 2), (2, 3), (3, 1)]);
/// assert_eq!(compose(&s, &r).unwrap().pairs(), &[(1, 1), (2, 2), (3, 3)]);
/// ```
pub fn compose(r: &Relation, s: &Relation) -> Option<Relation> {
    if r.target() != s.source() {
        return None;
    }
    let mut pairs = Vec::new();
    for (a, b) in r.iter() {
        for c in s.successors(b) {
            pairs.push((a, c));
        }
    }
    let rs = Relation::from_parts(pairs, r.source(), s.target());
    tracing::trace!(r = r.len(), s = s.len(), composed = rs.len(), "composed relations");
    Some(rs)
}

/// Compose by encoding both relations as matrices, taking the Boolean product and decoding.
pub fn compose_via_matrix(r: &Relation, s: &Relation) -> Option<Relation> {
    let mr: BooleanMatrix = r.to_matrix();
    let ms: BooleanMatrix = s.to_matrix();
    boolean_product(&mr, &ms).map(|m| Relation::from_matrix(&m))
}

/// The intermediates `b` with `(a, b) ∈ r` and `(b, c) ∈ s`, ascending.
pub fn witnesses(r: &Relation, s: &Relation, a: usize, c: usize) -> Vec<usize> {
    r.successors(a).filter(|&b| s.contains(b, c)).collect()
}

/// Every path `a → b → c` with `(a, b) ∈ r` and `(b, c) ∈ s`, sorted by `(from, via, to)`.
pub fn paths(r: &Relation, s: &Relation) -> Vec<Path> {
    let mut out: Vec<Path> = r
        .iter()
        .flat_map(move |(from, via)| s.successors(via).map(move |to| Path { from, via, to }))
        .collect();
    out.sort_unstable();
    out
}

/// The edges of `r` and of `s` that lie on at least one composing path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposingEdges {
    pub left: Relation,
    pub right: Relation,
}

impl ComposingEdges {
    pub fn new(r: &Relation, s: &Relation) -> Self {
        // (a,b) ∈ R composes iff b has an S-successor; (b,c) ∈ S iff b has an R-predecessor.
        let left = r
            .iter()
            .filter(|&(_, b)| s.successors(b).next().is_some())
            .collect();
        let right = s
            .iter()
            .filter(|&(b, _)| r.predecessors(b).next().is_some())
            .collect();
        Self {
            left: Relation::from_parts(left, r.source(), r.target()),
            right: Relation::from_parts(right, s.source(), s.target()),
        }
    }
}
