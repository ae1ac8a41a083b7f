//! Dense matrices and vectors with tolerance-aware comparisons
//!
//! Numeric primitives used by the linear-system solver in `math-linsys`:
//!
//! - [`Matrix`]: fixed-shape `rows x columns` container with add, subtract,
//!   multiply, transpose and row/column extraction
//! - [`Vector`]: row or column vector with dot and cross products,
//!   projections, angles and areas
//! - [`Tolerance`]: the threshold every equality and zero test goes through
//!
//! # Example
//!
//! ```
//! use math_dense::{Tolerance, Vector};
//!
//! let tol = Tolerance::default();
//! let a = Vector::column(vec![1.0, 0.0, 0.0], tol);
//! let b = Vector::column(vec![0.0, 1.0, 0.0], tol);
//!
//! let n = a.cross(&b).unwrap();
//! assert_eq!(n.as_slice(), &[0.0, 0.0, 1.0]);
//! assert!(n.is_orthogonal(&a).unwrap());
//! ```

mod error;
mod matrix;
mod tolerance;
mod vector;

pub use error::{DenseError, Result};
pub use matrix::Matrix;
pub use tolerance::Tolerance;
pub use vector::{Orientation, Vector};
