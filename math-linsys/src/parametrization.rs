//! Parametric description of an under-determined system's solutions
//!
//! Given a consistent system in reduced row-echelon form, every solution is
//!
//! ```text
//! x = base_point + t_1 * d_1 + ... + t_k * d_k
//! ```
//!
//! where the base point sets every free variable to zero and there is one
//! direction `d_i` per free variable.

use crate::elimination::find_pivots;
use crate::error::{LinsysError, Result};
use math_dense::{Tolerance, Vector};
use ndarray::{Array2, ArrayView2};
use std::fmt::{self, Write};

/// Base point plus one direction vector per free variable
#[derive(Debug, Clone, PartialEq)]
pub struct Parametrization {
    dimensions: usize,
    base_point: Vector,
    direction_vectors: Vec<Vector>,
    free_variables: Vec<usize>,
}

impl Parametrization {
    /// Build from a reduced row-echelon matrix and its offsets
    ///
    /// The system must be consistent; classification is the caller's job.
    /// Fails when `offsets` does not hold exactly one value per row.
    pub fn from_reduced(
        rref: ArrayView2<'_, f64>,
        offsets: &[f64],
        tolerance: Tolerance,
    ) -> Result<Self> {
        if offsets.len() != rref.nrows() {
            return Err(LinsysError::OffsetCountMismatch {
                expected: rref.nrows(),
                found: offsets.len(),
            });
        }
        Ok(Self::build(rref, offsets, tolerance))
    }

    /// Callers guarantee one offset per row
    pub(crate) fn build(rref: ArrayView2<'_, f64>, offsets: &[f64], tolerance: Tolerance) -> Self {
        let dimensions = rref.ncols();
        let pivots = find_pivots(rref, tolerance);

        let mut base = vec![0.0; dimensions];
        let mut is_pivot = vec![false; dimensions];
        for pivot in &pivots {
            base[pivot.variable] = offsets[pivot.row];
            is_pivot[pivot.variable] = true;
        }

        // row v holds the equation whose pivot is variable v, zero otherwise
        let mut aligned = Array2::<f64>::zeros((dimensions, dimensions));
        for pivot in &pivots {
            aligned.row_mut(pivot.variable).assign(&rref.row(pivot.row));
        }

        let mut direction_vectors = Vec::new();
        let mut free_variables = Vec::new();
        for free in (0..dimensions).filter(|&i| !is_pivot[i]) {
            let mut direction = vec![0.0; dimensions];
            for (j, slot) in direction.iter_mut().enumerate() {
                let coefficient = aligned[[j, free]];
                if coefficient != 0.0 {
                    *slot = -coefficient;
                }
            }
            direction[free] = 1.0;
            direction_vectors.push(Vector::column(direction, tolerance));
            free_variables.push(free + 1);
        }

        Self {
            dimensions,
            base_point: Vector::column(base, tolerance),
            direction_vectors,
            free_variables,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The solution with every free variable set to zero
    pub fn base_point(&self) -> &Vector {
        &self.base_point
    }

    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    /// 1-based index of the free variable behind each direction vector
    pub fn free_variables(&self) -> &[usize] {
        &self.free_variables
    }

    /// Number of pivot variables
    pub fn rank(&self) -> usize {
        self.dimensions - self.direction_vectors.len()
    }

    /// `base_point + sum(t_k * d_k)`
    pub fn point_at(&self, parameters: &[f64]) -> Result<Vector> {
        if parameters.len() != self.direction_vectors.len() {
            return Err(LinsysError::ParameterCountMismatch {
                expected: self.direction_vectors.len(),
                found: parameters.len(),
            });
        }
        let mut point = self.base_point.clone();
        for (direction, &t) in self.direction_vectors.iter().zip(parameters) {
            point = point.add(&direction.scalar_multiplication(t))?;
        }
        Ok(point)
    }

    /// Tabular rendering: base point column, then one column per direction,
    /// with the free variable names on the middle row
    pub fn vector_form(&self) -> String {
        let mut out = String::new();
        let middle = self.dimensions / 2;
        for i in 0..self.dimensions {
            let base = self.base_point.get(i).unwrap_or_default();
            let _ = write!(out, "|v{:03}| |{:.6}|", i + 1, base);
            out.push_str(if i == middle { " = " } else { "   " });
            for (direction, n) in self.direction_vectors.iter().zip(&self.free_variables) {
                let value = direction.get(i).unwrap_or_default();
                if i == middle {
                    let _ = write!(out, " + t{n:03} |{value:.6}|");
                } else {
                    let _ = write!(out, "        |{value:.6}|");
                }
            }
            out.push('\n');
        }
        out
    }
}

/// One line per coordinate, e.g. `v1 = 3 + 2t2 - t4`
impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tol = self.base_point.tolerance();
        for i in 0..self.dimensions {
            let mut terms = Vec::new();
            let base = self.base_point.get(i).unwrap_or_default();
            if !tol.is_zero(base) {
                terms.push((base, None));
            }
            for (direction, &n) in self.direction_vectors.iter().zip(&self.free_variables) {
                let c = direction.get(i).unwrap_or_default();
                if !tol.is_zero(c) {
                    terms.push((c, Some(n)));
                }
            }

            write!(f, "v{} =", i + 1)?;
            if terms.is_empty() {
                write!(f, " 0")?;
            }
            for (k, (value, parameter)) in terms.into_iter().enumerate() {
                let sign = match (k, value < 0.0) {
                    (0, true) => " -",
                    (0, false) => " ",
                    (_, true) => " - ",
                    (_, false) => " + ",
                };
                let magnitude = value.abs();
                match parameter {
                    None => write!(f, "{sign}{magnitude}")?,
                    Some(n) if tol.approx_eq(magnitude, 1.0) => write!(f, "{sign}t{n}")?,
                    Some(n) => write!(f, "{sign}{magnitude}t{n}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
