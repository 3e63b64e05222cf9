//! Arrows in diagrammatic order, shared by [`crate::relation::Relation`] and
//! [`crate::matrix::Matrix`].
pub mod traits;

pub use traits::*;
