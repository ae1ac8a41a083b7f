//! Tolerance used for every equality and zero test on dense containers

use crate::error::{DenseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute threshold below which a floating-point difference counts as zero
///
/// Every [`Matrix`](crate::Matrix) and [`Vector`](crate::Vector) carries one,
/// so comparisons never fall back to exact float equality.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Default tolerance for floating point rounding errors
    pub const DEFAULT: Tolerance = Tolerance(1e-9);

    /// Create a tolerance, rejecting negative and non-finite values
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Tolerance(value))
        } else {
            Err(DenseError::InvalidTolerance(value))
        }
    }

    /// The raw threshold
    pub fn value(self) -> f64 {
        self.0
    }

    /// `|x| <= tolerance`
    #[inline]
    pub fn is_zero(self, x: f64) -> bool {
        x.abs() <= self.0
    }

    /// `|a - b| <= tolerance`
    #[inline]
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = DenseError;

    fn try_from(value: f64) -> Result<Self> {
        Tolerance::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tol: Tolerance) -> Self {
        tol.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}
