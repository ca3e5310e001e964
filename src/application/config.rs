use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{LifeError, LifeResult, StepStrategy};

pub const DEFAULT_GRID_SIZE: usize = 50;
pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 4096;

pub const DEFAULT_STEP_INTERVAL_MS: u64 = 500;
pub const MIN_STEP_INTERVAL_MS: u64 = 10;
pub const MAX_STEP_INTERVAL_MS: u64 = 10_000;
/// Amount one speed adjustment moves the interval by
pub const STEP_INTERVAL_DELTA_MS: u64 = 50;

/// Construction-time settings for an engine and its auto-play driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Delay between automatic steps while running.
    pub step_interval_ms: u64,
    /// Optional RNG seed for reproducible fills.
    pub seed: Option<u64>,
    /// How each step schedules its work.
    pub strategy: StepStrategy,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            seed: None,
            strategy: StepStrategy::default(),
        }
    }
}

impl LifeConfig {
    /// Load a JSON config file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> LifeResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> LifeResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LifeResult<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(LifeError::InvalidConfig(format!(
                "grid_size {} must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}",
                self.grid_size
            )));
        }
        if !(MIN_STEP_INTERVAL_MS..=MAX_STEP_INTERVAL_MS).contains(&self.step_interval_ms) {
            return Err(LifeError::InvalidConfig(format!(
                "step_interval_ms {} must be between {MIN_STEP_INTERVAL_MS} and {MAX_STEP_INTERVAL_MS}",
                self.step_interval_ms
            )));
        }
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Clamp an interval into the supported range
pub fn clamp_interval(interval: Duration) -> Duration {
    let ms = duration_ms(interval).clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
    Duration::from_millis(ms)
}
