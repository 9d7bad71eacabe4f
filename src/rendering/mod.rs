use macroquad::prelude::*;

use crate::domain::Grid;

const BACKGROUND: Color = WHITE;
const ALIVE: Color = BLACK;

/// Screen rectangle `(x, y, w, h)` for a cell, leaving a 1px gap
/// so neighbouring cells stay distinguishable.
pub fn cell_rect(x: usize, y: usize, cell_size: f32) -> (f32, f32, f32, f32) {
    let side = (cell_size - 1.0).max(1.0);
    (x as f32 * cell_size, y as f32 * cell_size, side, side)
}

/// Draw the grid: white background, one black square per live cell
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    clear_background(BACKGROUND);

    for (x, y) in grid.iter_alive() {
        let (sx, sy, w, h) = cell_rect(x, y, cell_size);
        draw_rectangle(sx, sy, w, h, ALIVE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect() {
        assert_eq!(cell_rect(0, 0, 5.0), (0.0, 0.0, 4.0, 4.0));
        assert_eq!(cell_rect(3, 2, 5.0), (15.0, 10.0, 4.0, 4.0));
    }

    #[test]
    fn test_single_pixel_cells_stay_visible() {
        assert_eq!(cell_rect(7, 1, 1.0), (7.0, 1.0, 1.0, 1.0));
    }
}
