//! Hyperplane equations `n . x = k`

use crate::error::Result;
use math_dense::{Tolerance, Vector};
use std::fmt;

/// One linear equation: a normal vector `n` and offset `k` describing the
/// hyperplane `n . x = k`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEquation {
    normal_vector: Vector,
    k: f64,
}

impl LinearEquation {
    pub fn new(normal_vector: Vector, k: f64) -> Self {
        Self { normal_vector, k }
    }

    /// Line `a*x + b*y = k` in the plane
    pub fn line(a: f64, b: f64, k: f64) -> Self {
        Self::new(Vector::column(vec![a, b], Tolerance::DEFAULT), k)
    }

    /// Plane `a*x + b*y + c*z = k` in space
    pub fn plane(a: f64, b: f64, c: f64, k: f64) -> Self {
        Self::new(Vector::column(vec![a, b, c], Tolerance::DEFAULT), k)
    }

    pub fn dimensions(&self) -> usize {
        self.normal_vector.dimensions()
    }

    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn tolerance(&self) -> Tolerance {
        self.normal_vector.tolerance()
    }

    /// Normals are parallel
    pub fn is_parallel(&self, other: &LinearEquation) -> Result<bool> {
        Ok(self.normal_vector.is_parallel(&other.normal_vector)?)
    }

    /// Some point on the hyperplane, obtained by solving for the first
    /// variable with a nonzero coefficient. `None` for a zero normal.
    pub fn basepoint(&self) -> Option<Vector> {
        let tol = self.tolerance();
        let normal = self.normal_vector.as_slice();
        let i = normal.iter().position(|&n| !tol.is_zero(n))?;
        let mut point = vec![0.0; normal.len()];
        point[i] = self.k / normal[i];
        Some(Vector::column(point, tol))
    }

    /// `n . point - k`
    pub fn residual(&self, point: &Vector) -> Result<f64> {
        Ok(self.normal_vector.dot(point)? - self.k)
    }

    pub fn is_satisfied_by(&self, point: &Vector) -> Result<bool> {
        Ok(self.tolerance().is_zero(self.residual(point)?))
    }

    /// Both equations describe the same set of points
    ///
    /// Only parallel equations can coincide; for those, a point of one is
    /// checked against the other.
    pub fn is_coincident(&self, other: &LinearEquation) -> Result<bool> {
        if !self.is_parallel(other)? {
            return Ok(false);
        }
        let tol = self.tolerance();
        match (self.basepoint(), other.basepoint()) {
            (Some(point), Some(_)) => other.is_satisfied_by(&point),
            // 0 = k is either every point or none
            (None, None) => Ok(tol.is_zero(self.k) == tol.is_zero(other.k)),
            _ => Ok(false),
        }
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.normal_vector.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{n}v{}", i + 1)?;
        }
        write!(f, " = {}", self.k)
    }
}
