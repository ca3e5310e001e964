//! Plain-text frames for terminals and logs.

use crate::application::LifeEngine;
use crate::domain::{Cell, CellForecast};

pub const TITLE: &str = "Conway's Game of Life";

const ALIVE: char = 'O';
const DEAD: char = '.';
const BORN: char = '+';
const DYING: char = 'x';

/// Window-style title line carrying the generation count
pub fn render_title(engine: &LifeEngine) -> String {
    format!("{TITLE} : {}", engine.generation_count())
}

/// Glyph for a cell in forecast mode
pub fn forecast_glyph(forecast: CellForecast) -> char {
    match forecast {
        CellForecast::Survives => ALIVE,
        CellForecast::Dies => DYING,
        CellForecast::Born => BORN,
        CellForecast::Dead => DEAD,
    }
}

/// Draw the grid one text row per grid row.
/// With `forecast` set, cells about to die or be born get their own glyphs.
pub fn render_text(engine: &LifeEngine, forecast: bool) -> String {
    let grid = engine.grid();
    let size = grid.size();
    let mut out = String::with_capacity((size + 1) * size);

    for (x, y, cell) in grid.iter_cells() {
        let glyph = if forecast {
            forecast_glyph(cell.forecast(grid.count_live_neighbors(x, y)))
        } else if cell == Cell::Alive {
            ALIVE
        } else {
            DEAD
        };
        out.push(glyph);
        if x + 1 == size {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_render_plain() {
        let mut engine = LifeEngine::new(3);
        engine.toggle_cell(1, 0).unwrap();
        assert_eq!(render_text(&engine, false), ".O.\n...\n...\n");
    }

    #[test]
    fn test_render_forecast_blinker() {
        let mut engine = LifeEngine::new(5);
        engine.place_pattern(&presets::blinker(), 1, 1).unwrap();
        let frame = render_text(&engine, true);
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows, vec![".....", "..+..", ".xOx.", "..+..", "....."]);
    }

    #[test]
    fn test_title_tracks_generation() {
        let mut engine = LifeEngine::new(4);
        engine.step();
        engine.step();
        assert_eq!(render_title(&engine), "Conway's Game of Life : 2");
    }
}
