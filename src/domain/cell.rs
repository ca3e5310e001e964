/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Flip between alive and dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23, applied as ordered overrides:
    /// 1. Keep the current state
    /// 2. Exactly 3 neighbors forces Alive
    /// 3. Fewer than 2 or more than 3 neighbors forces Dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        let mut next = self;
        if neighbors == 3 {
            next = Cell::Alive;
        }
        if neighbors < 2 || neighbors > 3 {
            next = Cell::Dead;
        }
        next
    }

    /// What the next step will do to this cell
    pub const fn forecast(self, neighbors: u8) -> CellForecast {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => CellForecast::Survives,
            (Cell::Alive, _) => CellForecast::Dies,
            (Cell::Dead, 3) => CellForecast::Born,
            (Cell::Dead, _) => CellForecast::Dead,
        }
    }
}

/// Classification of a cell by its fate in the coming generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellForecast {
    /// Dead now and stays dead
    Dead,
    /// Dead now, exactly 3 neighbors
    Born,
    /// Alive with 2 or 3 neighbors
    Survives,
    /// Alive but under- or overpopulated
    Dies,
}
