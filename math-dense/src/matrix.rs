//! Dense matrix with a per-instance tolerance
//!
//! Shape is fixed at construction. Binary operations check shape
//! compatibility and return [`DenseError::ShapeMismatch`] instead of
//! panicking.

use crate::error::{DenseError, Result};
use crate::tolerance::Tolerance;
use crate::vector::Vector;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use std::fmt;

/// Dense `rows x columns` matrix of `f64`
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    elements: Array2<f64>,
    tolerance: Tolerance,
}

impl Matrix {
    /// Wrap an existing array
    pub fn new(elements: Array2<f64>, tolerance: Tolerance) -> Self {
        Self {
            elements,
            tolerance,
        }
    }

    /// Matrix of zeros
    pub fn zeros(rows: usize, columns: usize, tolerance: Tolerance) -> Self {
        Self::new(Array2::zeros((rows, columns)), tolerance)
    }

    /// Build from row slices. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], tolerance: Tolerance) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut elements = Array2::zeros((rows.len(), columns));
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(DenseError::ShapeMismatch {
                    operation: "from_rows",
                    left: (1, columns),
                    right: (1, row.len()),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                elements[[i, j]] = value;
            }
        }
        Ok(Self::new(elements, tolerance))
    }

    pub fn rows(&self) -> usize {
        self.elements.nrows()
    }

    pub fn columns(&self) -> usize {
        self.elements.ncols()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Read-only view of the underlying array
    pub fn elements(&self) -> ArrayView2<'_, f64> {
        self.elements.view()
    }

    /// Consume the matrix and return the underlying array
    pub fn into_elements(self) -> Array2<f64> {
        self.elements
    }

    /// Entry at (i, j), `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.elements.get([i, j]).copied()
    }

    pub fn is_same_size(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
    }

    /// (m x n) * (n x p) = (m x p)
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns() != other.rows() {
            return Err(DenseError::ShapeMismatch {
                operation: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Matrix::new(
            self.elements.dot(&other.elements),
            self.tolerance,
        ))
    }

    pub fn scalar_multiplication(&self, scalar: f64) -> Matrix {
        Matrix::new(self.elements.mapv(|v| v * scalar), self.tolerance)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_size("add", other)?;
        Ok(Matrix::new(&self.elements + &other.elements, self.tolerance))
    }

    /// `self - other`
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_size("subtract", other)?;
        Ok(Matrix::new(&self.elements - &other.elements, self.tolerance))
    }

    /// (m x n)^T = (n x m)
    pub fn transpose(&self) -> Matrix {
        Matrix::new(self.elements.t().to_owned(), self.tolerance)
    }

    /// True if every entry is zero within tolerance
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|&v| self.tolerance.is_zero(v))
    }

    /// True if the entry at (i, j) is within tolerance of `value`.
    /// Out-of-range indices compare unequal.
    pub fn approx_eq_at(&self, value: f64, i: usize, j: usize) -> bool {
        self.get(i, j)
            .is_some_and(|v| self.tolerance.approx_eq(v, value))
    }

    /// Same shape and every entry within tolerance
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.is_same_size(other)
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|(&a, &b)| self.tolerance.approx_eq(a, b))
    }

    /// Row `i` as a row vector
    pub fn row(&self, i: usize) -> Option<Vector> {
        (i < self.rows()).then(|| self.lane_to_vector(self.elements.row(i), true))
    }

    /// Column `j` as a column vector
    pub fn column(&self, j: usize) -> Option<Vector> {
        (j < self.columns()).then(|| self.lane_to_vector(self.elements.column(j), false))
    }

    /// Iterate over rows as row vectors
    pub fn row_vectors(&self) -> impl Iterator<Item = Vector> + '_ {
        self.elements
            .axis_iter(Axis(0))
            .map(move |lane| self.lane_to_vector(lane, true))
    }

    fn lane_to_vector(&self, lane: ArrayView1<'_, f64>, horizontal: bool) -> Vector {
        let values = lane.to_vec();
        if horizontal {
            Vector::row(values, self.tolerance)
        } else {
            Vector::column(values, self.tolerance)
        }
    }

    fn check_same_size(&self, operation: &'static str, other: &Matrix) -> Result<()> {
        if self.is_same_size(other) {
            Ok(())
        } else {
            Err(DenseError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.elements.axis_iter(Axis(0)) {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn m(elements: Array2<f64>) -> Matrix {
        Matrix::new(elements, Tolerance::default())
    }

    #[test]
    fn test_multiply() {
        let a = m(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let b = m(array![[1.0, 0.0, 2.0], [0.0, 1.0, 3.0]]);
        let c = a.multiply(&b).expect("3x2 * 2x3 should succeed");
        assert_eq!(c.shape(), (3, 3));
        assert_relative_eq!(c.get(0, 2).unwrap(), 8.0);
        assert_relative_eq!(c.get(2, 2).unwrap(), 28.0);
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        let a = m(array![[1.0, 2.0]]);
        let err = a.multiply(&a).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_add_subtract() {
        let a = m(array![[1.0, 2.0], [3.0, 4.0]]);
        let b = m(array![[0.5, 0.5], [1.0, -1.0]]);
        let sum = a.add(&b).unwrap();
        let diff = sum.subtract(&b).unwrap();
        assert!(diff.approx_eq(&a));
        assert_relative_eq!(sum.get(1, 1).unwrap(), 3.0);

        let c = m(array![[1.0, 2.0, 3.0]]);
        assert!(a.add(&c).is_err());
        assert!(a.subtract(&c).is_err());
    }

    #[test]
    fn test_transpose_and_scale() {
        let a = m(array![[1.0, 2.0, 3.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 1));
        assert_relative_eq!(t.get(2, 0).unwrap(), 3.0);
        let s = a.scalar_multiplication(-2.0);
        assert_relative_eq!(s.get(0, 1).unwrap(), -4.0);
    }

    #[test]
    fn test_is_zero_within_tolerance() {
        let a = m(array![[1e-12, -1e-11], [0.0, 5e-10]]);
        assert!(a.is_zero());
        let b = m(array![[1e-12, 1e-3]]);
        assert!(!b.is_zero());
    }

    #[test]
    fn test_approx_eq_compares_signed_entries() {
        let a = m(array![[1.0, -2.0]]);
        let b = m(array![[1.0, 2.0]]);
        assert!(!a.approx_eq(&b));
        assert!(a.approx_eq(&m(array![[1.0 + 1e-12, -2.0]])));
    }

    #[test]
    fn test_row_and_column() {
        let a = m(array![[1.0, 2.0], [3.0, 4.0]]);
        let r = a.row(1).unwrap();
        assert_eq!(r.shape(), (1, 2));
        assert_eq!(r.as_slice(), &[3.0, 4.0]);
        let c = a.column(0).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[1.0, 3.0]);
        assert!(a.row(2).is_none());
        assert!(a.column(5).is_none());
        assert_eq!(a.row_vectors().count(), 2);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(Matrix::from_rows(&rows, Tolerance::default()).is_err());
    }

    #[test]
    fn test_display() {
        let a = m(array![[1.0, 2.5], [-3.0, 0.0]]);
        assert_eq!(a.to_string(), "1 2.5\n-3 0\n");
    }
}
