//! Solver configuration

use math_dense::Tolerance;
use serde::{Deserialize, Serialize};

/// Configuration for [`EliminationEngine`](crate::EliminationEngine)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Threshold for every zero/one test during reduction and classification
    pub tolerance: Tolerance,
    /// Log the reduced system and the classification at info level
    pub log_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            log_progress: false,
        }
    }
}

impl SolverConfig {
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }
}
