//! # Finite Relations
//!
//! Binary relations over small finite sets `{1..N}`, their matrix representation, and
//! composition by Boolean matrix product.
//!
//! A [Relation](crate::relation::Relation) `R ⊆ A × B` is an arrow `A → B` in the category of
//! relations, and a 0/1 [Matrix](crate::matrix::Matrix) is an arrow in the category of Boolean
//! matrices. Both implement [Arrow](crate::category::Arrow), and encoding a relation as its
//! matrix is a functor between them: composing then encoding agrees with encoding then
//! multiplying.
//!
//! ```rust
//! use finite_relations::prelude::*;
//!
//! let r = Relation::new([(1, 1), (2, 3), (3, 2)], 3, 3).unwrap();
//! let s = Relation::new([(1, 2), (2, 1), (3, 3)], 3, 3).unwrap();
//!
//! // Composition is diagrammatic: `R ∘ S` follows `R`, then `S`.
//! let rs = r.compose(&s).unwrap();
//! assert_eq!(rs.pairs(), &[(1, 2), (2, 3), (3, 1)]);
//! assert_eq!(rs, (&r >> &s).unwrap());
//!
//! // ... and agrees with the Boolean product of the matrices.
//! let m = boolean_product(&r.to_matrix(), &s.to_matrix()).unwrap();
//! assert_eq!(Relation::from_matrix(&m), rs);
//!
//! // It is not commutative.
//! assert_ne!(s.compose(&r).unwrap(), rs);
//! ```
//!
//! # Views
//!
//! Besides the algebra, the crate computes what the interactive views show:
//!
//! - [represent](crate::represent): set notation, matrix table, Cartesian plot and directed graph
//! - [reveal](crate::reveal): click-to-reveal cells of a Boolean product and path highlighting
//! - [timeline] and [storyboard]: the animated composition of two relations
//! - [practice]: randomized questions with worked solutions
//!
//! Random inputs come from [generate], which takes any [rand::Rng].
pub mod category;
pub mod error;

pub mod domain;
pub mod matrix;
pub mod relation;

pub mod compose;
pub mod product;

pub mod generate;
pub mod represent;
pub mod reveal;
pub mod storyboard;
pub mod timeline;

pub mod practice;
pub mod settings;

pub mod prelude {
    //! The common types and operations.
    pub use crate::category::*;
    pub use crate::compose::{compose, compose_via_matrix, paths, witnesses, Path};
    pub use crate::domain::Domain;
    pub use crate::error::{RelationError, Result};
    pub use crate::generate::{MatrixGenerator, RelationGenerator};
    pub use crate::matrix::{BooleanMatrix, Matrix};
    pub use crate::product::{boolean_product, cell_calculation, count_product, CellCalculation};
    pub use crate::relation::{Pair, Relation};
    pub use crate::timeline::{Animation, TimelineConfig};
}
