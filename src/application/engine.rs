use rand::Rng;
use tracing::debug;

use crate::domain::{Cell, CellForecast, Grid, LifeError, LifeResult, Pattern, StepStrategy};
use super::config::LifeConfig;

/// LifeEngine owns the current generation and a scratch buffer of equal size.
/// `step` fills the buffer from the current grid and then swaps the two.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    current: Grid,
    next: Grid,
    generation: u64,
    strategy: StepStrategy,
}

impl LifeEngine {
    /// Create an engine with an all-dead grid of side `size`
    ///
    /// # Panics
    /// If `size * size` overflows `usize`; use `from_config` for untrusted sizes.
    pub fn new(size: usize) -> Self {
        Self {
            current: Grid::new(size),
            next: Grid::new(size),
            generation: 0,
            strategy: StepStrategy::default(),
        }
    }

    /// Create an engine from a validated config
    pub fn from_config(config: &LifeConfig) -> LifeResult<Self> {
        config.validate()?;
        Ok(Self::new(config.grid_size).with_strategy(config.strategy))
    }

    pub fn with_strategy(mut self, strategy: StepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_strategy(&mut self, strategy: StepStrategy) {
        self.strategy = strategy;
    }

    pub const fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.current.size()
    }

    pub const fn generation_count(&self) -> u64 {
        self.generation
    }

    /// The authoritative grid
    pub const fn grid(&self) -> &Grid {
        &self.current
    }

    fn check(&self, x: usize, y: usize) -> LifeResult<()> {
        if self.current.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::OutOfRange { x, y, size: self.size() })
        }
    }

    /// Flip one cell. The generation counter is left alone.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> LifeResult<()> {
        self.check(x, y)?;
        self.current.toggle(x, y);
        Ok(())
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> LifeResult<()> {
        self.check(x, y)?;
        self.current.set(x, y, Cell::from_alive(alive));
        Ok(())
    }

    pub fn is_alive(&self, x: usize, y: usize) -> LifeResult<bool> {
        self.check(x, y)?;
        Ok(self.current.get(x, y).is_some_and(Cell::is_alive))
    }

    /// Live cells among the eight wrapped neighbors of (x, y)
    pub fn count_neighbors(&self, x: usize, y: usize) -> LifeResult<u8> {
        self.check(x, y)?;
        Ok(self.current.count_live_neighbors(x, y))
    }

    /// What the next step will do to (x, y)
    pub fn forecast(&self, x: usize, y: usize) -> LifeResult<CellForecast> {
        self.check(x, y)?;
        let cell = self.current.get(x, y).unwrap_or_default();
        Ok(cell.forecast(self.current.count_live_neighbors(x, y)))
    }

    /// Fill every cell with an even coin flip from `rng`.
    /// The generation counter becomes 1: a fresh fill counts as the first generation.
    pub fn randomize_fill<R: Rng>(&mut self, rng: &mut R) {
        self.current.randomize(rng);
        self.generation = 1;
        debug!(population = self.current.population(), "randomized grid");
    }

    /// `randomize_fill` backed by the thread-local RNG
    pub fn randomize_fill_entropy(&mut self) {
        self.randomize_fill(&mut rand::rng());
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.current.clear();
        self.generation = 0;
    }

    /// Stamp a pattern with its top-left corner at (x, y), wrapping at the edges
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) -> LifeResult<()> {
        self.check(x, y)?;
        pattern.place_on(&mut self.current, x, y);
        Ok(())
    }

    /// Advance one generation and return the new generation count
    pub fn step(&mut self) -> u64 {
        if self.strategy.use_parallel(self.size()) {
            self.current.evolve_into_parallel(&mut self.next);
        } else {
            self.current.evolve_into(&mut self.next);
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        debug!(generation = self.generation, "stepped");
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.current.iter_cells()
    }
}
