//! Error types for solving linear systems

use math_dense::DenseError;
use thiserror::Error;

/// Errors that can occur while building or solving a linear system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinsysError {
    /// The system has no equations
    #[error("linear system must contain at least one equation")]
    EmptySystem,

    /// An equation lives in a different number of dimensions than the first
    #[error("equation {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        /// Position of the offending equation
        index: usize,
        /// Dimensions of the first equation
        expected: usize,
        /// Dimensions of the offending equation
        found: usize,
    },

    /// Wrong number of free parameters passed to a parametrization
    #[error("expected {expected} free parameters, got {found}")]
    ParameterCountMismatch {
        /// Number of free variables
        expected: usize,
        /// Number of parameters given
        found: usize,
    },

    /// Offsets do not pair up with the rows of a reduced matrix
    #[error("expected {expected} offsets, one per row, got {found}")]
    OffsetCountMismatch {
        /// Number of matrix rows
        expected: usize,
        /// Number of offsets given
        found: usize,
    },

    /// A pivot selected as nonzero read as zero while being scaled to one.
    /// This points at a tolerance or elimination defect, never at user input.
    #[error("internal invariant violated: pivot at row {row}, variable {variable} is {value:e}")]
    InvariantViolation {
        /// Row of the pivot
        row: usize,
        /// Column (variable index) of the pivot
        variable: usize,
        /// Value found at the pivot position
        value: f64,
    },

    /// Error raised by the numeric primitives
    #[error(transparent)]
    Dense(#[from] DenseError),
}

/// A specialized `Result` type for linear system operations
pub type Result<T> = std::result::Result<T, LinsysError>;

impl LinsysError {
    /// Returns `true` if the error was caused by malformed caller input
    pub fn is_input_error(&self) -> bool {
        !self.is_internal()
    }

    /// Returns `true` for should-not-happen conditions inside the solver
    pub fn is_internal(&self) -> bool {
        matches!(self, LinsysError::InvariantViolation { .. })
    }
}
