//! Binary relations `R ⊆ A × B` between finite sets `A = {1..a}` and `B = {1..b}`.
pub mod arrow;

pub use arrow::*;
