//! Gaussian elimination to reduced row-echelon form and classification of
//! the solution set

use super::pivot::{find_pivots, next_pivot, Pivot};
use super::rows::{write_augmented, RowState};
use crate::config::SolverConfig;
use crate::equation::LinearEquation;
use crate::error::{LinsysError, Result};
use crate::parametrization::Parametrization;
use math_dense::{Matrix, Tolerance, Vector};
use std::fmt;

/// Row-reduces a system of linear equations
///
/// The engine owns its working rows; [`reduce`](Self::reduce) and
/// [`solve`](Self::solve) consume it, so a partially reduced system is never
/// observable.
#[derive(Debug, Clone)]
pub struct EliminationEngine {
    rows: RowState,
    config: SolverConfig,
}

impl EliminationEngine {
    /// Engine using the tolerance carried by the first equation
    pub fn new(equations: &[LinearEquation]) -> Result<Self> {
        let first = equations.first().ok_or(LinsysError::EmptySystem)?;
        let config = SolverConfig::default().with_tolerance(first.tolerance());
        Self::with_config(equations, &config)
    }

    pub fn with_config(equations: &[LinearEquation], config: &SolverConfig) -> Result<Self> {
        let first = equations.first().ok_or(LinsysError::EmptySystem)?;
        let expected = first.dimensions();
        if let Some((index, eq)) = equations
            .iter()
            .enumerate()
            .find(|(_, eq)| eq.dimensions() != expected)
        {
            return Err(LinsysError::DimensionMismatch {
                index,
                expected,
                found: eq.dimensions(),
            });
        }
        Ok(Self {
            rows: RowState::from_equations(equations, config.tolerance),
            config: *config,
        })
    }

    /// Number of unknowns
    pub fn dimensions(&self) -> usize {
        self.rows.dimensions()
    }

    /// Number of equations
    pub fn num_equations(&self) -> usize {
        self.rows.len()
    }

    pub fn tolerance(&self) -> Tolerance {
        self.config.tolerance
    }

    /// Bring the system to reduced row-echelon form
    pub fn reduce(mut self) -> Result<ReducedSystem> {
        log::debug!("linear system:\n{}", self.rows);
        self.triangular_form();
        let pivots = self.reduced_row_echelon_form()?;
        log::debug!("reduced row-echelon form:\n{}", self.rows);
        log::debug!(
            "pivots: {}",
            pivots
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );

        let tolerance = self.config.tolerance;
        let (coefficients, offsets) = self.rows.into_parts();
        Ok(ReducedSystem {
            matrix: Matrix::new(coefficients, tolerance),
            offsets: offsets.to_vec(),
            pivots,
            tolerance,
            log_progress: self.config.log_progress,
        })
    }

    /// Reduce and classify
    pub fn solve(self) -> Result<Solution> {
        Ok(self.reduce()?.classify())
    }

    /// Forward pass: one pivot per row, zeros below every pivot
    fn triangular_form(&mut self) {
        let (mut row, mut variable) = (0, 0);
        while row < self.rows.len() && variable < self.rows.dimensions() {
            let Some(found) = self.rows.find_pivot_at_or_below(row, variable) else {
                break;
            };
            self.rows.swap_rows(row, found.row);
            let pivot = Pivot {
                row,
                variable: found.variable,
            };
            for target in (row + 1)..self.rows.len() {
                self.rows.eliminate(pivot, target);
            }
            row += 1;
            variable = pivot.variable + 1;
        }
    }

    /// Backward pass: zeros above every pivot, pivots scaled to one
    fn reduced_row_echelon_form(&mut self) -> Result<Vec<Pivot>> {
        let tolerance = self.config.tolerance;
        let mut pivots = Vec::new();
        let (mut row, mut variable) = (0, 0);
        while let Some(pivot) = next_pivot(self.rows.coefficients(), tolerance, row, variable) {
            for target in (0..pivot.row).rev() {
                self.rows.eliminate(pivot, target);
            }
            self.reduce_pivot_to_one(pivot)?;
            pivots.push(pivot);
            row = pivot.row + 1;
            variable = pivot.variable + 1;
        }
        Ok(pivots)
    }

    fn reduce_pivot_to_one(&mut self, pivot: Pivot) -> Result<()> {
        let value = self.rows.value_at(pivot);
        if self.config.tolerance.is_zero(value) {
            log::error!("pivot {pivot} reads as zero ({value:e}) while scaling to one");
            return Err(LinsysError::InvariantViolation {
                row: pivot.row,
                variable: pivot.variable,
                value,
            });
        }
        self.rows.multiply_row(1.0 / value, pivot.row);
        self.rows.set_value_at(pivot, 1.0);
        Ok(())
    }
}

/// A system in reduced row-echelon form
#[derive(Debug, Clone)]
pub struct ReducedSystem {
    matrix: Matrix,
    offsets: Vec<f64>,
    pivots: Vec<Pivot>,
    tolerance: Tolerance,
    log_progress: bool,
}

impl ReducedSystem {
    /// Reduced coefficient matrix, one row per equation
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Reduced right-hand side, parallel to the rows of [`matrix`](Self::matrix)
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Pivots in discovery order
    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Number of pivot rows
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Number of unknowns
    pub fn dimensions(&self) -> usize {
        self.matrix.columns()
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// False when some row reads `0 = k` with `k` nonzero
    pub fn is_consistent(&self) -> bool {
        let rows = self.matrix.elements();
        !rows
            .outer_iter()
            .zip(&self.offsets)
            .any(|(row, &k)| {
                row.iter().all(|&v| self.tolerance.is_zero(v)) && !self.tolerance.is_zero(k)
            })
    }

    /// Consistent with fewer pivots than unknowns
    pub fn has_free_variables(&self) -> bool {
        self.is_consistent() && self.rank() < self.dimensions()
    }

    /// Rows of the reduced system as equations
    pub fn equations(&self) -> Vec<LinearEquation> {
        self.matrix
            .elements()
            .outer_iter()
            .zip(&self.offsets)
            .map(|(row, &k)| LinearEquation::new(Vector::column(row.to_vec(), self.tolerance), k))
            .collect()
    }

    /// Parametric description of the solution space
    ///
    /// Meaningful for consistent systems only; see [`classify`](Self::classify).
    pub fn parametrize(&self) -> Parametrization {
        Parametrization::build(self.matrix.elements(), &self.offsets, self.tolerance)
    }

    pub fn classify(&self) -> Solution {
        let solution = if !self.is_consistent() {
            Solution::Inconsistent
        } else if self.rank() < self.dimensions() {
            Solution::Infinite(self.parametrize())
        } else {
            Solution::Unique(self.unique_solution())
        };
        if self.log_progress {
            log::info!("{solution}");
        } else {
            log::debug!("{solution}");
        }
        solution
    }

    fn unique_solution(&self) -> Vector {
        let mut values = vec![0.0; self.dimensions()];
        for pivot in &self.pivots {
            values[pivot.variable] = self.offsets[pivot.row];
        }
        Vector::column(values, self.tolerance)
    }
}

impl fmt::Display for ReducedSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_augmented(f, self.matrix.elements(), &self.offsets)
    }
}

/// Solution set of a linear system
#[derive(Debug, Clone)]
pub enum Solution {
    /// No point satisfies every equation
    Inconsistent,
    /// Exactly one point satisfies every equation
    Unique(Vector),
    /// The solutions form an affine subspace of positive dimension
    Infinite(Parametrization),
}

impl Solution {
    pub fn is_consistent(&self) -> bool {
        !matches!(self, Solution::Inconsistent)
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Solution::Infinite(_))
    }

    /// The single solution, if there is exactly one
    pub fn unique(&self) -> Option<&Vector> {
        match self {
            Solution::Unique(point) => Some(point),
            _ => None,
        }
    }

    pub fn parametrization(&self) -> Option<&Parametrization> {
        match self {
            Solution::Infinite(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Inconsistent => write!(f, "No solution exists for the system."),
            Solution::Unique(_) => write!(f, "One solution exists for the system."),
            Solution::Infinite(p) => {
                let free = p.direction_vectors().len();
                let noun = if free == 1 { "variable" } else { "variables" };
                write!(
                    f,
                    "Infinitely many solutions exist for the system ({free} free {noun})."
                )
            }
        }
    }
}

/// Reduce `equations` with the given configuration and classify the result
pub fn solve(equations: &[LinearEquation], config: &SolverConfig) -> Result<Solution> {
    EliminationEngine::with_config(equations, config)?.solve()
}

/// Pivots of an already-reduced coefficient matrix
pub fn pivots_of(matrix: &Matrix) -> Vec<Pivot> {
    find_pivots(matrix.elements(), matrix.tolerance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reduce(eqs: &[LinearEquation]) -> ReducedSystem {
        EliminationEngine::new(eqs)
            .expect("valid system")
            .reduce()
            .expect("reduction should succeed")
    }

    #[test]
    fn test_empty_system() {
        assert_eq!(
            EliminationEngine::new(&[]).unwrap_err(),
            LinsysError::EmptySystem
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let eqs = [
            LinearEquation::plane(1.0, 1.0, 1.0, 1.0),
            LinearEquation::line(1.0, 1.0, 1.0),
        ];
        assert_eq!(
            EliminationEngine::new(&eqs).unwrap_err(),
            LinsysError::DimensionMismatch {
                index: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_row_swap_when_leading_entry_is_zero() {
        let eqs = [
            LinearEquation::line(0.0, 1.0, 2.0),
            LinearEquation::line(1.0, 1.0, 5.0),
        ];
        let reduced = reduce(&eqs);
        let m = reduced.matrix();
        assert_relative_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_relative_eq!(m.get(0, 1).unwrap(), 0.0);
        assert_relative_eq!(m.get(1, 1).unwrap(), 1.0);
        assert_relative_eq!(reduced.offsets()[0], 3.0);
        assert_relative_eq!(reduced.offsets()[1], 2.0);
    }

    #[test]
    fn test_triangular_pass_skips_empty_column() {
        // first column is zero everywhere, pivots land in columns 1 and 2
        let eqs = [
            LinearEquation::plane(0.0, 0.0, 2.0, 4.0),
            LinearEquation::plane(0.0, 1.0, 1.0, 3.0),
        ];
        let reduced = reduce(&eqs);
        assert_eq!(
            reduced.pivots(),
            &[
                Pivot { row: 0, variable: 1 },
                Pivot { row: 1, variable: 2 },
            ]
        );
        assert_relative_eq!(reduced.offsets()[0], 1.0);
        assert_relative_eq!(reduced.offsets()[1], 2.0);
        assert!(reduced.has_free_variables());
    }

    #[test]
    fn test_parallel_planes_and_unique_point() {
        let eqs = [
            LinearEquation::plane(5.862, 1.178, -10.366, -8.15),
            LinearEquation::plane(-2.931, -0.589, 5.183, -4.075),
        ];
        let solution = EliminationEngine::new(&eqs).unwrap().solve().unwrap();
        // parallel planes with different offsets
        assert!(!solution.is_consistent());

        let eqs = [
            LinearEquation::plane(1.0, 1.0, 1.0, 6.0),
            LinearEquation::plane(0.0, 2.0, 5.0, -4.0),
            LinearEquation::plane(2.0, 5.0, -1.0, 27.0),
        ];
        let solution = EliminationEngine::new(&eqs).unwrap().solve().unwrap();
        let x = solution.unique().expect("unique solution");
        assert_relative_eq!(x.get(0).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(x.get(1).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(x.get(2).unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_overdetermined_consistent_is_unique() {
        let eqs = [
            LinearEquation::line(1.0, 0.0, 1.0),
            LinearEquation::line(0.0, 1.0, 2.0),
            LinearEquation::line(1.0, 1.0, 3.0),
        ];
        let reduced = reduce(&eqs);
        assert_eq!(reduced.rank(), 2);
        assert!(reduced.classify().is_unique());
    }

    #[test]
    fn test_rank_deficient_without_mixed_rows_is_infinite() {
        // x = 1 in the plane: every reduced row isolates one variable, y stays free
        let eqs = [LinearEquation::line(1.0, 0.0, 1.0)];
        let solution = EliminationEngine::new(&eqs).unwrap().solve().unwrap();
        let p = solution.parametrization().expect("infinite solutions");
        assert_eq!(p.free_variables(), &[2]);
    }

    #[test]
    fn test_configured_tolerance_is_used() {
        let eqs = [
            LinearEquation::line(1.0, 1.0, 1.0),
            LinearEquation::line(1.0, 1.0 + 1e-6, 1.0),
        ];
        let loose = SolverConfig::default().with_tolerance(Tolerance::new(1e-3).unwrap());
        assert!(solve(&eqs, &loose).unwrap().is_infinite());
        assert!(solve(&eqs, &SolverConfig::default()).unwrap().is_unique());
    }

    #[test]
    fn test_equations_round_trip() {
        let eqs = [
            LinearEquation::line(2.0, 4.0, 6.0),
            LinearEquation::line(1.0, 3.0, 4.0),
        ];
        let reduced = reduce(&eqs);
        let rows = reduced.equations();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].normal_vector().as_slice(), &[1.0, 0.0]);
        assert_relative_eq!(rows[0].k(), 1.0, epsilon = 1e-12);
        assert_eq!(pivots_of(reduced.matrix()), reduced.pivots().to_vec());
    }

    #[test]
    fn test_display() {
        let reduced = reduce(&[LinearEquation::line(2.0, 0.0, 6.0)]);
        assert_eq!(reduced.to_string(), " 1  0 | 3\n");
        assert_eq!(
            Solution::Inconsistent.to_string(),
            "No solution exists for the system."
        );
    }

    #[test]
    fn test_solution_display_counts_free_variables() {
        let two = EliminationEngine::new(&[LinearEquation::plane(1.0, 1.0, 1.0, 1.0)])
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(
            two.to_string(),
            "Infinitely many solutions exist for the system (2 free variables)."
        );
        let one = EliminationEngine::new(&[LinearEquation::line(1.0, 1.0, 1.0)])
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(
            one.to_string(),
            "Infinitely many solutions exist for the system (1 free variable)."
        );
    }
}
