// Domain layer - Cells, grid and the life rule
pub mod domain;

// Application layer - Engine state, locking and the auto-play driver
pub mod application;

// Infrastructure layer - Text rendering
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, CellForecast, Grid, LifeError, LifeResult, Pattern, StepStrategy, presets};
pub use application::{AutoPlay, LifeConfig, LifeEngine, SharedEngine};
