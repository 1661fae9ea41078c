//! Concrete categories with pullbacks and pushouts
//!
//! Two small client categories used to exercise and test the
//! construction layer: finite sets with functions, and positive integers
//! under divisibility (a thin category, so every mediator is unique by
//! construction).

pub mod divlattice;
pub mod finset;

pub use divlattice::{DivArrow, DivLattice};
pub use finset::{FinSet, FiniteSet, SetFunction};
