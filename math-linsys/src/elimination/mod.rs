//! Row reduction of linear systems
//!
//! - [`EliminationEngine`]: Gaussian elimination to triangular form, then
//!   back-substitution to reduced row-echelon form
//! - [`ReducedSystem`]: the reduced matrix, offsets and pivots
//! - [`Solution`]: inconsistent, unique, or infinitely many solutions
//!
//! Pivots are chosen by position (lowest row, leftmost column), not by
//! magnitude.

mod engine;
mod pivot;
mod rows;

pub use engine::{pivots_of, solve, EliminationEngine, ReducedSystem, Solution};
pub use pivot::Pivot;

pub(crate) use pivot::find_pivots;
