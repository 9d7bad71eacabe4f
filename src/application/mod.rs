mod action;
mod pacer;
mod simulation;

pub use action::{Action, RunState};
pub use pacer::Pacer;
pub use simulation::Simulation;
