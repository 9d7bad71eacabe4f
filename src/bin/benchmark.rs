//! Timing comparison of the serial and parallel generation step

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::Config;
use toroidal_life::domain::{Grid, advance_into, advance_parallel_into};

fn seeded_grid(width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height);
    grid.randomize(&mut StdRng::seed_from_u64(0x11fe), 0.45);
    grid
}

fn benchmark(width: usize, height: usize, iterations: u32, step: fn(&Grid, &mut Grid)) -> f64 {
    let mut grid = seeded_grid(width, height);
    let mut scratch = Grid::new(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        step(&grid, &mut scratch);
        std::mem::swap(&mut grid, &mut scratch);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let (w, h) = Config::default().grid_dimensions();
    let sizes = [(w, h), (500, 500), (1000, 1000), (2000, 2000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for (width, height) in sizes {
        let serial_ms = benchmark(width, height, iterations, advance_into);
        let parallel_ms = benchmark(width, height, iterations, advance_parallel_into);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", width, height),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
