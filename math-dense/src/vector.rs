//! Row and column vectors
//!
//! A [`Vector`] is the 1-D specialization of [`Matrix`]: one extent is 1 and
//! the orientation is remembered, so `transpose` and `to_matrix` round-trip.
//! Element-wise operations (`add`, `subtract`) require the same orientation;
//! products (`dot`, `cross`) only require matching dimensions.

use crate::error::{DenseError, Result};
use crate::matrix::Matrix;
use crate::tolerance::Tolerance;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// 1 x N
    Row,
    /// N x 1
    Column,
}

/// Dense vector with tolerance-aware comparisons
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    elements: Vec<f64>,
    orientation: Orientation,
    tolerance: Tolerance,
}

impl Vector {
    /// N x 1 vector
    pub fn column(elements: Vec<f64>, tolerance: Tolerance) -> Self {
        Self {
            elements,
            orientation: Orientation::Column,
            tolerance,
        }
    }

    /// 1 x N vector
    pub fn row(elements: Vec<f64>, tolerance: Tolerance) -> Self {
        Self {
            elements,
            orientation: Orientation::Row,
            tolerance,
        }
    }

    /// Column vector of zeros
    pub fn zeros(dimensions: usize, tolerance: Tolerance) -> Self {
        Self::column(vec![0.0; dimensions], tolerance)
    }

    /// Convert an `N x 1` or `1 x N` matrix. A `1 x 1` matrix becomes a column.
    pub fn from_matrix(matrix: &Matrix) -> Result<Self> {
        let (rows, columns) = matrix.shape();
        let tolerance = matrix.tolerance();
        let elements: Vec<f64> = matrix.elements().iter().copied().collect();
        match (rows, columns) {
            (_, 1) => Ok(Self::column(elements, tolerance)),
            (1, _) => Ok(Self::row(elements, tolerance)),
            _ => Err(DenseError::NotAVector { rows, columns }),
        }
    }

    /// Column vector pointing from `p1` to `p2`
    pub fn from_points(p1: &[f64], p2: &[f64], tolerance: Tolerance) -> Result<Self> {
        if p1.len() != p2.len() {
            return Err(DenseError::PointDimensionMismatch {
                left: p1.len(),
                right: p2.len(),
            });
        }
        let elements = p1.iter().zip(p2).map(|(a, b)| b - a).collect();
        Ok(Self::column(elements, tolerance))
    }

    /// Number of components (the non-unit extent)
    pub fn dimensions(&self) -> usize {
        self.elements.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// (rows, columns) of the equivalent matrix
    pub fn shape(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Row => (1, self.dimensions()),
            Orientation::Column => (self.dimensions(), 1),
        }
    }

    /// Component `i`, `None` when out of range
    pub fn get(&self, i: usize) -> Option<f64> {
        self.elements.get(i).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.elements[..])
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.elements
    }

    pub fn to_matrix(&self) -> Matrix {
        // one extent is 1, so the flat index is i + j
        let elements = Array2::from_shape_fn(self.shape(), |(i, j)| self.elements[i + j]);
        Matrix::new(elements, self.tolerance)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_same_shape("add", other)?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// `self - other`
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.check_same_shape("subtract", other)?;
        Ok(self.zip_map(other, |a, b| a - b))
    }

    pub fn scalar_multiplication(&self, scalar: f64) -> Vector {
        self.with_elements(self.elements.iter().map(|v| v * scalar).collect())
    }

    pub fn transpose(&self) -> Vector {
        let orientation = match self.orientation {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        };
        Vector {
            elements: self.elements.clone(),
            orientation,
            tolerance: self.tolerance,
        }
    }

    /// sqrt(v1^2 + v2^2 + ... + vn^2)
    pub fn magnitude(&self) -> f64 {
        self.elements.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// v / ||v||
    pub fn normalize(&self) -> Result<Vector> {
        if self.is_zero() {
            return Err(DenseError::ZeroVector {
                operation: "normalize",
            });
        }
        Ok(self.scalar_multiplication(1.0 / self.magnitude()))
    }

    /// Angle between the vectors in radians
    pub fn angle(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimensions("angle", other)?;
        if self.is_zero() || other.is_zero() {
            return Err(DenseError::ZeroVector { operation: "angle" });
        }
        let cos = self.dot(other)? / (self.magnitude() * other.magnitude());
        // rounding can push |cos| slightly above 1
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// v . w = v1*w1 + v2*w2 + ... + vn*wn
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimensions("dot", other)?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// True if one vector is a scalar multiple of the other. The zero vector
    /// is parallel to everything.
    pub fn is_parallel(&self, other: &Vector) -> Result<bool> {
        self.check_same_dimensions("is_parallel", other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let tol = self.tolerance;
        let Some(k) = self.elements.iter().position(|&v| !tol.is_zero(v)) else {
            return Ok(true);
        };
        let scalar = other.elements[k] / self.elements[k];
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .all(|(&a, &b)| tol.approx_eq(b, a * scalar)))
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        Ok(self.tolerance.is_zero(self.dot(other)?))
    }

    /// Projection of `self` onto `basis`
    pub fn projection(&self, basis: &Vector) -> Result<Vector> {
        self.check_same_dimensions("projection", basis)?;
        if self.is_zero() || basis.is_zero() {
            return Err(DenseError::ZeroVector {
                operation: "projection",
            });
        }
        let unit = basis.normalize()?;
        let length = self.dot(&unit)?;
        Ok(self.with_elements(unit.elements.iter().map(|u| u * length).collect()))
    }

    /// Component of `self` orthogonal to `basis`
    pub fn orthogonal_component(&self, basis: &Vector) -> Result<Vector> {
        let parallel = self.projection(basis)?;
        Ok(self.zip_map(&parallel, |a, b| a - b))
    }

    /// Component of `self` parallel to `basis`
    pub fn parallel_component(&self, basis: &Vector) -> Result<Vector> {
        let orthogonal = self.orthogonal_component(basis)?;
        Ok(self.zip_map(&orthogonal, |a, b| a - b))
    }

    pub fn is_three_dimensional(&self) -> bool {
        self.orientation == Orientation::Column && self.dimensions() == 3
    }

    /// v x w, both must be 3-dimensional columns
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for v in [self, other] {
            if !v.is_three_dimensional() {
                return Err(DenseError::NotThreeDimensional {
                    operation: "cross",
                    dimensions: v.dimensions(),
                });
            }
        }
        let (a, b) = (&self.elements, &other.elements);
        Ok(self.with_elements(vec![
            a[1] * b[2] - b[1] * a[2],
            -(a[0] * b[2] - b[0] * a[2]),
            a[0] * b[1] - b[0] * a[1],
        ]))
    }

    /// ||v x w||
    pub fn area_of_parallelogram(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    /// ||v x w|| / 2
    pub fn area_of_triangle(&self, other: &Vector) -> Result<f64> {
        Ok(0.5 * self.area_of_parallelogram(other)?)
    }

    /// True if component `i` is within tolerance of `value`
    pub fn approx_eq_at(&self, value: f64, i: usize) -> bool {
        self.get(i)
            .is_some_and(|v| self.tolerance.approx_eq(v, value))
    }

    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|&v| self.tolerance.is_zero(v))
    }

    /// Same shape and every component within tolerance
    pub fn approx_eq(&self, other: &Vector) -> bool {
        self.shape() == other.shape()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(&a, &b)| self.tolerance.approx_eq(a, b))
    }

    fn with_elements(&self, elements: Vec<f64>) -> Vector {
        Vector {
            elements,
            orientation: self.orientation,
            tolerance: self.tolerance,
        }
    }

    fn zip_map(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        self.with_elements(
            self.elements
                .iter()
                .zip(&other.elements)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }

    fn check_same_shape(&self, operation: &'static str, other: &Vector) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(DenseError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    fn check_same_dimensions(&self, operation: &'static str, other: &Vector) -> Result<()> {
        if self.dimensions() == other.dimensions() {
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

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.elements.iter().map(|v| v.to_string()).collect();
        match self.orientation {
            Orientation::Row => writeln!(f, "{}", parts.join(" ")),
            Orientation::Column => {
                for part in parts {
                    writeln!(f, "{part}")?;
                }
                Ok(())
            }
        }
    }
}
