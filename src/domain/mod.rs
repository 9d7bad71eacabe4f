mod grid;
pub mod engine;
pub mod rules;

pub use grid::Grid;
pub use engine::{advance, advance_into, advance_parallel_into, count_neighbors};
