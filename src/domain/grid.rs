use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid is a square, toroidal field of cells.
/// The side length is fixed at construction; every edge wraps to the opposite one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    ///
    /// # Panics
    /// If `size * size` overflows `usize`. `LifeConfig::validate` keeps
    /// configured sizes far below that.
    pub fn new(size: usize) -> Self {
        let Some(len) = size.checked_mul(size) else {
            panic!("grid side {size} overflows the cell count");
        };
        Self {
            size,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check that (x, y) lies inside the grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }

    /// Offset a coordinate by -1, 0 or +1 with toroidal wrapping
    #[inline]
    const fn wrap(&self, coord: usize, delta: isize) -> usize {
        let n = self.size as isize;
        ((coord as isize + delta) % n + n) as usize % self.size
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// The caller guarantees (x, y) is inside the grid.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0u8;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = self.wrap(x, dx);
                let ny = self.wrap(y, dy);
                if self.cells[self.get_index(nx, ny)].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    #[inline]
    fn next_state(&self, x: usize, y: usize) -> Cell {
        let current = self.cells[self.get_index(x, y)];
        current.evolve(self.count_live_neighbors(x, y))
    }

    /// Write the next generation of `self` into `next` (serial).
    /// Reads only from `self`, so every cell sees the same snapshot.
    pub fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.size, next.size);
        for (idx, slot) in next.cells.iter_mut().enumerate() {
            let (x, y) = (idx % self.size, idx / self.size);
            *slot = self.next_state(x, y);
        }
    }

    /// Parallel variant of `evolve_into`, one rayon task per row
    pub fn evolve_into_parallel(&self, next: &mut Grid) {
        debug_assert_eq!(self.size, next.size);
        let size = self.size;
        next.cells
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    *slot = self.next_state(x, y);
                }
            });
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Set every cell alive or dead with even odds
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from_alive(rng.random::<bool>());
        });
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.size, idx / self.size, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    #[should_panic(expected = "overflows the cell count")]
    fn test_oversized_side_panics() {
        let _ = Grid::new(usize::MAX);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(5);
        grid.set(4, 4, Cell::Alive);
        grid.set(5, 0, Cell::Alive);

        assert_eq!(grid.get(4, 4), Some(Cell::Alive));
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_count_neighbors_blinker() {
        let mut grid = Grid::new(10);

        // Blinker at (4,5), (5,5), (6,5)
        grid.set(4, 5, Cell::Alive);
        grid.set(5, 5, Cell::Alive);
        grid.set(6, 5, Cell::Alive);

        assert_eq!(grid.count_live_neighbors(5, 5), 2);
        assert_eq!(grid.count_live_neighbors(5, 4), 3);
        assert_eq!(grid.count_live_neighbors(5, 6), 3);
    }

    #[test]
    fn test_count_neighbors_wraps_corners() {
        let mut grid = Grid::new(6);
        grid.set(5, 5, Cell::Alive);
        grid.set(5, 0, Cell::Alive);
        grid.set(0, 5, Cell::Alive);

        assert_eq!(grid.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_count_neighbors_full_grid() {
        let mut grid = Grid::new(3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        // On a 3x3 torus all eight neighbors are distinct cells
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 8);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(40);
        grid.randomize(&mut rng);

        let mut serial = Grid::new(40);
        let mut parallel = Grid::new(40);
        grid.evolve_into(&mut serial);
        grid.evolve_into_parallel(&mut parallel);

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_randomize_is_seed_deterministic() {
        let mut a = Grid::new(20);
        let mut b = Grid::new(20);
        a.randomize(&mut StdRng::seed_from_u64(42));
        b.randomize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        // 400 fair coin flips land nowhere near the extremes
        assert!((100..300).contains(&a.population()));
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut grid = Grid::new(4);
        grid.set(3, 1, Cell::Alive);
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(3, 1)]);
        assert_eq!(grid.iter_cells().count(), 16);
    }
}
