//! Pivot discovery
//!
//! Pivots are found left-to-right, top-to-bottom: starting at `(row,
//! variable)`, the row is scanned rightwards for an entry that is nonzero
//! within tolerance; a row with nothing left is skipped and the scan restarts
//! at `variable` on the next row. The search for the following pivot begins
//! at `(row + 1, variable + 1)`.

use math_dense::Tolerance;
use ndarray::ArrayView2;
use std::fmt;

/// Row and variable (column) index of a pivot entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pivot {
    pub row: usize,
    pub variable: usize,
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(R{}, v{})", self.row + 1, self.variable + 1)
    }
}

/// Next pivot at or after `(row, variable)`, without swapping rows
pub(crate) fn next_pivot(
    matrix: ArrayView2<'_, f64>,
    tolerance: Tolerance,
    row: usize,
    variable: usize,
) -> Option<Pivot> {
    let (rows, dimensions) = matrix.dim();
    if variable >= dimensions {
        return None;
    }
    (row..rows).find_map(|r| {
        (variable..dimensions)
            .find(|&v| !tolerance.is_zero(matrix[[r, v]]))
            .map(|v| Pivot { row: r, variable: v })
    })
}

/// Every pivot of an echelon-form matrix, in discovery order
pub(crate) fn find_pivots(matrix: ArrayView2<'_, f64>, tolerance: Tolerance) -> Vec<Pivot> {
    let mut pivots = Vec::new();
    let (mut row, mut variable) = (0, 0);
    while let Some(pivot) = next_pivot(matrix, tolerance, row, variable) {
        pivots.push(pivot);
        row = pivot.row + 1;
        variable = pivot.variable + 1;
    }
    pivots
}
