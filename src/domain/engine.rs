//! Generation stepping for the toroidal grid.
//!
//! Every cell of the next generation is computed from the same input grid
//! and written into a separate buffer; the caller swaps buffers afterwards.

use rayon::prelude::*;

use super::{Grid, rules};

/// Count live neighbors using toroidal wrapping (grid wraps like a torus)
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (w, h) = grid.dimensions();

    (-1isize..=1)
        .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .map(|(dx, dy)| {
            let nx = (x as isize + dx).rem_euclid(w as isize) as usize;
            let ny = (y as isize + dy).rem_euclid(h as isize) as usize;
            grid.get(nx, ny)
        })
        .filter(|&alive| alive)
        .count() as u8
}

/// Pure evolution - returns a new grid (serial)
pub fn advance(grid: &Grid) -> Grid {
    let (w, h) = grid.dimensions();
    let mut next = Grid::new(w, h);
    advance_into(grid, &mut next);
    next
}

/// Write the next generation of `src` into `dst`.
pub fn advance_into(src: &Grid, dst: &mut Grid) {
    prepare(src, dst);
    let width = src.width();

    for (idx, cell) in dst.cells_mut().iter_mut().enumerate() {
        let (x, y) = (idx % width, idx / width);
        *cell = rules::next_state(src.get(x, y), count_neighbors(src, x, y));
    }
}

/// Row-parallel evolution using rayon. Produces exactly what
/// [`advance_into`] produces.
pub fn advance_parallel_into(src: &Grid, dst: &mut Grid) {
    prepare(src, dst);
    let width = src.width();
    if width == 0 {
        return;
    }

    dst.cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = rules::next_state(src.get(x, y), count_neighbors(src, x, y));
            }
        });
}

fn prepare(src: &Grid, dst: &mut Grid) {
    debug_assert_eq!(src.dimensions(), dst.dimensions(), "scratch buffer size mismatch");
    if src.dimensions() != dst.dimensions() {
        let (w, h) = src.dimensions();
        *dst = Grid::new(w, h);
    }
}
