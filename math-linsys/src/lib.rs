//! Solving systems of linear equations by row reduction
//!
//! This crate reduces a system of linear equations to reduced row-echelon
//! form, classifies its solution set, and describes infinite solution sets
//! parametrically.
//!
//! # Features
//!
//! - **Equations**: [`LinearEquation`] with `line`/`plane` shortcuts
//! - **Elimination**: [`EliminationEngine`] producing a [`ReducedSystem`]
//! - **Classification**: [`Solution`] is `Inconsistent`, `Unique` or `Infinite`
//! - **Parametrization**: base point plus free-variable directions
//!
//! All numeric comparisons go through a single [`Tolerance`] taken from
//! [`SolverConfig`] (default `1e-9`).
//!
//! # Example
//!
//! ```
//! use math_linsys::{EliminationEngine, LinearEquation, Solution};
//!
//! let system = [
//!     LinearEquation::plane(1.0, 1.0, 1.0, 1.0),
//!     LinearEquation::plane(2.0, 2.0, 2.0, 2.0),
//! ];
//!
//! let solution = EliminationEngine::new(&system)?.solve()?;
//! let Solution::Infinite(p) = solution else {
//!     panic!("expected infinitely many solutions");
//! };
//! assert_eq!(p.base_point().as_slice(), &[1.0, 0.0, 0.0]);
//! assert_eq!(p.free_variables(), &[2, 3]);
//! println!("{p}");
//! # Ok::<(), math_linsys::LinsysError>(())
//! ```

pub mod config;
pub mod elimination;
pub mod equation;
pub mod error;
pub mod parametrization;

pub use config::SolverConfig;
pub use elimination::{solve, EliminationEngine, Pivot, ReducedSystem, Solution};
pub use equation::LinearEquation;
pub use error::{LinsysError, Result};
pub use parametrization::Parametrization;

pub use math_dense::{Matrix, Tolerance, Vector};
