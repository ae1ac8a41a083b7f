//! Error types for dense matrix and vector operations

use thiserror::Error;

/// Errors that can occur when combining or inspecting dense containers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DenseError {
    /// Operands of a binary operation have incompatible shapes
    #[error("{operation}: incompatible shapes {left:?} and {right:?}")]
    ShapeMismatch {
        /// Name of the operation that failed
        operation: &'static str,
        /// Shape (rows, columns) of the left operand
        left: (usize, usize),
        /// Shape (rows, columns) of the right operand
        right: (usize, usize),
    },

    /// A zero vector was given where a nonzero vector is required
    #[error("{operation}: cannot use a zero vector")]
    ZeroVector {
        /// Name of the operation that failed
        operation: &'static str,
    },

    /// The elements do not describe a vector (neither extent equals 1)
    #[error("vector must be either Nx1 or 1xN, got {rows}x{columns}")]
    NotAVector {
        /// Number of rows given
        rows: usize,
        /// Number of columns given
        columns: usize,
    },

    /// A 3-dimensional column vector is required
    #[error("{operation}: vectors must be 3 dimensional columns, got {dimensions} dimensions")]
    NotThreeDimensional {
        /// Name of the operation that failed
        operation: &'static str,
        /// Dimensions of the offending vector
        dimensions: usize,
    },

    /// Two points live in spaces of different dimension
    #[error("points must have the same number of dimensions ({left} vs {right})")]
    PointDimensionMismatch {
        /// Dimensions of the first point
        left: usize,
        /// Dimensions of the second point
        right: usize,
    },

    /// Tolerance is negative or not finite
    #[error("invalid tolerance: {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),
}

/// A specialized `Result` type for dense operations
pub type Result<T> = std::result::Result<T, DenseError>;

impl DenseError {
    /// Returns `true` if the operands had incompatible shapes
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, DenseError::ShapeMismatch { .. })
    }

    /// Returns `true` if the input itself was degenerate (zero vector,
    /// wrong dimensionality, malformed elements).
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            DenseError::ZeroVector { .. }
                | DenseError::NotAVector { .. }
                | DenseError::NotThreeDimensional { .. }
                | DenseError::PointDimensionMismatch { .. }
        )
    }
}
