//! Step strategy selection.
//!
//! Every strategy evaluates the whole next generation against the same
//! immutable snapshot, so they are interchangeable; they only differ in how
//! the rows are scheduled.

use serde::{Deserialize, Serialize};

/// Grids at least this wide are stepped in parallel under `Auto`.
pub const PARALLEL_THRESHOLD: usize = 256;

/// How `step()` walks the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStrategy {
    /// Row by row on the calling thread
    Serial,
    /// Rows fanned out over the rayon pool
    Parallel,
    /// Parallel once the grid is large enough to pay for it
    #[default]
    Auto,
}

impl StepStrategy {
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel, StepStrategy::Auto]
    }

    /// Resolve `Auto` for a grid of the given side length
    pub fn use_parallel(self, size: usize) -> bool {
        match self {
            StepStrategy::Serial => false,
            StepStrategy::Parallel => true,
            StepStrategy::Auto => size >= PARALLEL_THRESHOLD,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "serial",
            StepStrategy::Parallel => "parallel",
            StepStrategy::Auto => "auto",
        }
    }
}

impl std::str::FromStr for StepStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepStrategy::all()
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown step strategy: {s} (expected serial, parallel or auto)"))
    }
}
