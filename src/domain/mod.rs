mod cell;
mod error;
mod grid;
mod patterns;
mod strategy;

pub use cell::{Cell, CellForecast};
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use strategy::{PARALLEL_THRESHOLD, StepStrategy};
