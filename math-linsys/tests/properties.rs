//! Properties of the solver checked on seeded random integer systems

use math_linsys::{EliminationEngine, LinearEquation, ReducedSystem, Solution, Tolerance, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const SYSTEMS: usize = 300;
const RESIDUAL: f64 = 1e-6;

fn random_normal(rng: &mut StdRng, dimensions: usize) -> Vec<f64> {
    (0..dimensions)
        .map(|_| rng.random_range(-4..=4) as f64)
        .collect()
}

/// Random system; when `planted` is given every equation passes through it
fn random_system(rng: &mut StdRng, planted: Option<&[f64]>) -> Vec<LinearEquation> {
    let dimensions = planted.map_or_else(|| rng.random_range(1..=4), <[f64]>::len);
    let count = rng.random_range(1..=5);
    (0..count)
        .map(|_| {
            let normal = random_normal(rng, dimensions);
            let k = match planted {
                Some(x) => normal.iter().zip(x).map(|(a, b)| a * b).sum(),
                None => rng.random_range(-6..=6) as f64,
            };
            LinearEquation::new(Vector::column(normal, Tolerance::DEFAULT), k)
        })
        .collect()
}

fn planted_point(rng: &mut StdRng) -> Vec<f64> {
    let dimensions = rng.random_range(1..=4);
    (0..dimensions)
        .map(|_| rng.random_range(-3..=3) as f64)
        .collect()
}

fn reduce(equations: &[LinearEquation]) -> ReducedSystem {
    EliminationEngine::new(equations)
        .expect("generated systems are well formed")
        .reduce()
        .expect("reduction should succeed")
}

fn assert_satisfies_all(equations: &[LinearEquation], point: &Vector) {
    for eq in equations {
        let r = eq.residual(point).unwrap();
        assert!(r.abs() < RESIDUAL, "{eq} misses {point:?} by {r}");
    }
}

#[test]
fn test_rref_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SYSTEMS {
        let equations = random_system(&mut rng, None);
        let once = reduce(&equations);
        let twice = reduce(&once.equations());
        assert!(once.matrix().approx_eq(twice.matrix()), "{once}\nvs\n{twice}");
        let tol = once.tolerance();
        for (a, b) in once.offsets().iter().zip(twice.offsets()) {
            assert!(tol.approx_eq(*a, *b), "{once}\nvs\n{twice}");
        }
        assert_eq!(once.pivots(), twice.pivots());
    }
}

#[test]
fn test_unique_solution_satisfies_every_equation() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = 0;
    for _ in 0..SYSTEMS {
        let equations = random_system(&mut rng, None);
        if let Solution::Unique(x) = reduce(&equations).classify() {
            assert_satisfies_all(&equations, &x);
            seen += 1;
        }
    }
    assert!(seen > 0, "no unique systems generated");
}

#[test]
fn test_parametrization_satisfies_every_equation() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut seen = 0;
    for _ in 0..SYSTEMS {
        let point = planted_point(&mut rng);
        let equations = random_system(&mut rng, Some(&point));
        let reduced = reduce(&equations);
        let solution = reduced.classify();
        assert!(solution.is_consistent(), "planted point {point:?} ignored");

        if let Solution::Infinite(p) = solution {
            seen += 1;
            assert_satisfies_all(&equations, p.base_point());
            for direction in p.direction_vectors() {
                let shifted = p.base_point().add(direction).unwrap();
                assert_satisfies_all(&equations, &shifted);
                for eq in &equations {
                    assert!(eq.normal_vector().dot(direction).unwrap().abs() < RESIDUAL);
                }
            }
            assert_eq!(p.direction_vectors().len(), p.dimensions() - reduced.rank());
            assert_eq!(p.free_variables().len(), p.direction_vectors().len());
        }
    }
    assert!(seen > 0, "no under-determined systems generated");
}

#[test]
fn test_pivots_never_share_row_or_column() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SYSTEMS {
        let equations = random_system(&mut rng, None);
        let reduced = reduce(&equations);
        let rows: HashSet<_> = reduced.pivots().iter().map(|p| p.row).collect();
        let columns: HashSet<_> = reduced.pivots().iter().map(|p| p.variable).collect();
        assert_eq!(rows.len(), reduced.rank());
        assert_eq!(columns.len(), reduced.rank());
        assert!(reduced.rank() <= equations.len().min(reduced.dimensions()));
    }
}

#[test]
fn test_rref_pivot_columns_are_unit_vectors() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..SYSTEMS {
        let equations = random_system(&mut rng, None);
        let reduced = reduce(&equations);
        let m = reduced.matrix();
        for pivot in reduced.pivots() {
            for row in 0..m.rows() {
                let expected = if row == pivot.row { 1.0 } else { 0.0 };
                assert!(m.approx_eq_at(expected, row, pivot.variable), "{reduced}");
            }
        }
    }
}
