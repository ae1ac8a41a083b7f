//! Working rows of an elimination: coefficient matrix plus offsets
//!
//! Row `i` of `coefficients` together with `offsets[i]` is equation `i`.
//! Only the three elementary row operations mutate it.

use super::pivot::Pivot;
use crate::equation::LinearEquation;
use math_dense::Tolerance;
use ndarray::{Array1, Array2, ArrayView2};
use std::fmt;

#[derive(Debug, Clone)]
pub(crate) struct RowState {
    coefficients: Array2<f64>,
    offsets: Array1<f64>,
    tolerance: Tolerance,
}

impl RowState {
    /// Callers guarantee a non-empty, dimension-homogeneous slice
    pub(crate) fn from_equations(equations: &[LinearEquation], tolerance: Tolerance) -> Self {
        let rows = equations.len();
        let dimensions = equations.first().map_or(0, LinearEquation::dimensions);
        let mut coefficients = Array2::zeros((rows, dimensions));
        let mut offsets = Array1::zeros(rows);
        for (i, eq) in equations.iter().enumerate() {
            for (j, &n) in eq.normal_vector().as_slice().iter().enumerate() {
                coefficients[[i, j]] = n;
            }
            offsets[i] = eq.k();
        }
        Self {
            coefficients,
            offsets,
            tolerance,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.coefficients.nrows()
    }

    pub(crate) fn dimensions(&self) -> usize {
        self.coefficients.ncols()
    }

    pub(crate) fn coefficients(&self) -> ArrayView2<'_, f64> {
        self.coefficients.view()
    }

    pub(crate) fn is_zero_at(&self, row: usize, variable: usize) -> bool {
        self.tolerance.is_zero(self.coefficients[[row, variable]])
    }

    /// First nonzero entry in the columns from `variable` onwards, searching
    /// each column from `row` downwards before moving right
    pub(crate) fn find_pivot_at_or_below(&self, row: usize, variable: usize) -> Option<Pivot> {
        (variable..self.dimensions()).find_map(|v| {
            (row..self.len())
                .find(|&r| !self.is_zero_at(r, v))
                .map(|r| Pivot { row: r, variable: v })
        })
    }

    /// R1 <-> R2
    pub(crate) fn swap_rows(&mut self, row1: usize, row2: usize) {
        if row1 == row2 {
            return;
        }
        log::trace!("R{} <-> R{}", row1 + 1, row2 + 1);
        for j in 0..self.dimensions() {
            self.coefficients.swap([row1, j], [row2, j]);
        }
        self.offsets.swap(row1, row2);
    }

    /// c * R -> R
    pub(crate) fn multiply_row(&mut self, scalar: f64, row: usize) {
        log::trace!("{scalar} * R{} -> R{}", row + 1, row + 1);
        self.coefficients.row_mut(row).mapv_inplace(|v| v * scalar);
        self.offsets[row] *= scalar;
    }

    /// c * R1 + R2 -> R2
    pub(crate) fn add_multiple_of_row(&mut self, scalar: f64, row1: usize, row2: usize) {
        log::trace!("{scalar} * R{} + R{} -> R{}", row1 + 1, row2 + 1, row2 + 1);
        let source = self.coefficients.row(row1).to_owned();
        self.coefficients.row_mut(row2).scaled_add(scalar, &source);
        self.offsets[row2] += scalar * self.offsets[row1];
    }

    /// Zero the entry at `(target, pivot.variable)` by adding a multiple of
    /// the pivot row. No-op when either entry is already zero.
    pub(crate) fn eliminate(&mut self, pivot: Pivot, target: usize) {
        if self.is_zero_at(target, pivot.variable) || self.is_zero_at(pivot.row, pivot.variable) {
            return;
        }
        let scalar = self.coefficients[[target, pivot.variable]]
            / self.coefficients[[pivot.row, pivot.variable]];
        self.add_multiple_of_row(-scalar, pivot.row, target);
        self.coefficients[[target, pivot.variable]] = 0.0;
    }

    pub(crate) fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.coefficients, self.offsets)
    }

    pub(crate) fn value_at(&self, pivot: Pivot) -> f64 {
        self.coefficients[[pivot.row, pivot.variable]]
    }

    pub(crate) fn set_value_at(&mut self, pivot: Pivot, value: f64) {
        self.coefficients[[pivot.row, pivot.variable]] = value;
    }
}

/// Augmented `[A | b]` rendering, one equation per line
pub(crate) fn write_augmented(
    f: &mut impl fmt::Write,
    coefficients: ArrayView2<'_, f64>,
    offsets: &[f64],
) -> fmt::Result {
    for (row, k) in coefficients.outer_iter().zip(offsets) {
        for v in row.iter() {
            write!(f, " {v} ")?;
        }
        writeln!(f, "| {k}")?;
    }
    Ok(())
}

impl fmt::Display for RowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_augmented(f, self.coefficients.view(), &self.offsets.to_vec())
    }
}
