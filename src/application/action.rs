/// User intents the simulation understands, independent of the input backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Stop the main loop
    Quit,
    /// Flip between paused and active
    TogglePause,
    /// Reseed the grid at random
    Reset,
    /// Kill every cell
    Clear,
    /// Flip a single cell
    ToggleCell { x: usize, y: usize },
}

/// Where the simulation is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Running, generations suspended
    #[default]
    Paused,
    /// Running, one generation per tick
    Active,
    /// The loop should exit
    Terminated,
}

impl RunState {
    pub const fn is_running(self) -> bool {
        !matches!(self, RunState::Terminated)
    }

    /// Paused <-> Active; Terminated stays put
    pub const fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Active,
            RunState::Active => RunState::Paused,
            RunState::Terminated => RunState::Terminated,
        }
    }
}
