//! Compiled-in settings for the simulator window and simulation.

use std::time::Duration;

use macroquad::prelude::Conf;
use thiserror::Error;

/// Reasons a configuration cannot produce a usable grid.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("window {width}x{height} cannot hold a single {cell_size}px cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    /// Time between generations
    pub tick_interval: Duration,
    /// Chance that a cell starts alive on seed and reset
    pub live_probability: f64,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            cell_size: 5,
            tick_interval: Duration::from_millis(100),
            live_probability: 0.45,
            seed: None,
        }
    }
}

impl Config {
    /// Check the settings and derive the grid dimensions `(W, H)`.
    pub fn validate(&self) -> Result<(usize, usize), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::InvalidProbability(self.live_probability));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        let (w, h) = self.grid_dimensions();
        if w == 0 || h == 0 {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        Ok((w, h))
    }

    /// Grid dimensions by integer division of the window by the cell size.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        if self.cell_size == 0 {
            return (0, 0);
        }
        (
            (self.window_width / self.cell_size) as usize,
            (self.window_height / self.cell_size) as usize,
        )
    }

    /// Map a window pixel to the grid cell under it.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if self.cell_size == 0 || px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px as u32 / self.cell_size) as usize;
        let y = (py as u32 / self.cell_size) as usize;
        let (w, h) = self.grid_dimensions();
        (x < w && y < h).then_some((x, y))
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "Conway's Game of Life".to_owned(),
            window_width: self.window_width as i32,
            window_height: self.window_height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_dimensions() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok((204, 153)));
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let config = Config { cell_size: 0, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn test_rejects_tiny_window() {
        let config = Config { window_width: 4, cell_size: 5, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::WindowTooSmall { .. })));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = Config { live_probability: 1.5, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidProbability(1.5)));
    }

    #[test]
    fn test_rejects_zero_tick() {
        let config = Config { tick_interval: Duration::ZERO, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_pixel_to_cell() {
        let config = Config::default();

        assert_eq!(config.pixel_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(config.pixel_to_cell(4.9, 4.9), Some((0, 0)));
        assert_eq!(config.pixel_to_cell(5.0, 12.0), Some((1, 2)));
        assert_eq!(config.pixel_to_cell(1019.0, 764.0), Some((203, 152)));
    }

    #[test]
    fn test_pixel_outside_grid() {
        let config = Config::default();

        assert_eq!(config.pixel_to_cell(-1.0, 10.0), None);
        assert_eq!(config.pixel_to_cell(10.0, -0.5), None);
        // 1024 / 5 leaves a 4px strip that maps to no cell
        assert_eq!(config.pixel_to_cell(1021.0, 10.0), None);
        assert_eq!(config.pixel_to_cell(10.0, 766.0), None);
    }
}
