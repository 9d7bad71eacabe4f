// Domain layer - grid and generation rule
pub mod domain;

// Application layer - interaction state machine and pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::Grid;
pub use application::{Action, Pacer, RunState, Simulation};
pub use config::{Config, ConfigError};
pub use error::InitError;
