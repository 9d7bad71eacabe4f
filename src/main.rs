use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use log::{error, info};
use macroquad::prelude::*;
use toroidal_life::{Config, InitError, Pacer, Simulation, input, rendering};

async fn run(config: Config, mut sim: Simulation) {
    let inputs = input::InputQueue::new();
    let mut pacer = Pacer::new(config.tick_interval);
    let cell_size = config.cell_size as f32;

    while sim.is_running() {
        // Input first so edits land before this frame's generation
        sim.apply_all(inputs.poll_actions(&config));
        if !sim.is_running() {
            break;
        }

        if pacer.advance(get_frame_time()) {
            sim.tick();
        }

        rendering::draw_grid(sim.grid(), cell_size);
        next_frame().await;
    }

    info!("shutting down after {} generations", sim.generation());
}

fn start(config: Config) -> Result<(), InitError> {
    let (width, height) = config.validate()?;
    info!(
        "grid {}x{} ({}px cells), tick every {:?}, seed {:?}",
        width, height, config.cell_size, config.tick_interval, config.seed
    );

    let sim = Simulation::new(width, height, config.live_probability, config.seed);
    let conf = config.window_conf();

    panic::catch_unwind(AssertUnwindSafe(move || {
        macroquad::Window::from_config(conf, run(config, sim));
    }))
    .map_err(|payload| InitError::from_panic(payload.as_ref()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match start(Config::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
