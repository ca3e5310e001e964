use thiserror::Error;

/// Errors surfaced by the life engine and its configuration.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A coordinate-taking operation got a cell outside `[0, size)`.
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfRange { x: usize, y: usize, size: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A thread panicked while holding the engine lock.
    #[error("engine lock was poisoned")]
    Poisoned,
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LifeResult<T> = Result<T, LifeError>;
