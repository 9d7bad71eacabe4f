use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Action, RunState};
use crate::domain::{Grid, engine};

/// Simulation owns the world and the interaction state machine.
/// Actions from the input layer mutate it; `tick` advances it.
pub struct Simulation {
    grid: Grid,
    /// Scratch buffer for the next generation, swapped with `grid` each step
    scratch: Grid,
    state: RunState,
    generation: u64,
    live_probability: f64,
    rng: StdRng,
}

impl Simulation {
    /// Create a paused simulation with a randomly seeded grid.
    /// `seed` fixes the RNG; `None` draws from the OS.
    pub fn new(width: usize, height: usize, live_probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut sim = Self {
            grid: Grid::new(width, height),
            scratch: Grid::new(width, height),
            state: RunState::default(),
            generation: 0,
            live_probability,
            rng,
        };
        sim.grid.randomize(&mut sim.rng, live_probability);
        sim
    }

    /// Wrap an existing grid, paused, without reseeding it.
    pub fn from_grid(grid: Grid, live_probability: f64, seed: u64) -> Self {
        let (w, h) = grid.dimensions();
        Self {
            grid,
            scratch: Grid::new(w, h),
            state: RunState::default(),
            generation: 0,
            live_probability,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Apply one user action. Actions after termination are ignored.
    pub fn apply(&mut self, action: Action) {
        if !self.state.is_running() {
            return;
        }

        match action {
            Action::Quit => {
                info!("quit requested at generation {}", self.generation);
                self.state = RunState::Terminated;
            }
            Action::TogglePause => {
                self.state = self.state.toggled();
                debug!("simulation {:?}", self.state);
            }
            Action::Reset => {
                self.grid.randomize(&mut self.rng, self.live_probability);
                self.generation = 0;
                info!("grid reseeded, {} cells alive", self.grid.count_alive());
            }
            Action::Clear => {
                self.grid.clear();
                self.generation = 0;
                info!("grid cleared");
            }
            Action::ToggleCell { x, y } => {
                if self.grid.toggle(x, y) {
                    debug!("toggled ({x}, {y}) -> {}", self.grid.get(x, y));
                }
            }
        }
    }

    /// Apply a batch of pending actions in order.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        actions.into_iter().for_each(|action| self.apply(action));
    }

    /// Advance one generation when active. Returns whether the grid advanced.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Active {
            return false;
        }

        engine::advance_parallel_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        debug!(
            "generation {}: {} cells alive",
            self.generation,
            self.grid.count_alive()
        );
        true
    }
}
