use super::{Cell, Grid, LifeError, LifeResult};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at (x, y).
    /// Cells past an edge wrap around to the opposite side.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        let size = grid.size();
        for (dx, dy) in &self.cells {
            grid.set((x + dx) % size, (y + dy) % size, Cell::Alive);
        }
    }

    /// Top-left corner that centers this pattern on a grid of `size`
    pub fn centered_origin(&self, size: usize) -> (usize, usize) {
        (
            size.saturating_sub(self.width) / 2,
            size.saturating_sub(self.height) / 2,
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            r_pentomino(),
            block(),
        ]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> LifeResult<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(presets::block().cells.len(), 4);
    }

    #[test]
    fn test_place_wraps_edges() {
        let mut grid = Grid::new(6);
        presets::block().place_on(&mut grid, 5, 5);

        assert_eq!(grid.population(), 4);
        for (x, y) in [(5, 5), (0, 5), (5, 0), (0, 0)] {
            assert_eq!(grid.get(x, y), Some(Cell::Alive), "({x},{y})");
        }
    }

    #[test]
    fn test_presets_are_described() {
        for pattern in presets::all_patterns() {
            assert!(!pattern.description.is_empty(), "{} has no description", pattern.name);
        }
        assert_eq!(presets::blinker().description, "Oscillator (period 2)");
    }

    #[test]
    fn test_centered_origin() {
        assert_eq!(presets::block().centered_origin(10), (4, 4));
        assert_eq!(presets::glider().centered_origin(2), (0, 0));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(presets::by_name("r-PENTOMINO").map(|p| p.name).ok(), Some("R-pentomino"));
        assert!(matches!(
            presets::by_name("gun"),
            Err(LifeError::UnknownPattern(name)) if name == "gun"
        ));
    }
}
