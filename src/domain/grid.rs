use rand::Rng;

/// Grid stores the live/dead state of a fixed-size toroidal world.
/// Cells are kept row-major in a single owned buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get cell state at (x, y). Out-of-range reads are dead.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(self.in_bounds(x, y), "read ({x}, {y}) outside {}x{}", self.width, self.height);
        self.in_bounds(x, y) && self.cells[self.get_index(x, y)]
    }

    /// Set cell state at (x, y). Out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(self.in_bounds(x, y), "write ({x}, {y}) outside {}x{}", self.width, self.height);
        if self.in_bounds(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = alive;
        }
    }

    /// Flip a single cell. Returns false when (x, y) is off the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.get_index(x, y);
        self.cells[idx] = !self.cells[idx];
        true
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }

    /// Reseed every cell independently, alive with `probability`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = rng.random_bool(probability));
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Positions of every live cell, row by row
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Mutable row-major storage for the engine
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}
