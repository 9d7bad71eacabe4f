use thiserror::Error;

use crate::config::ConfigError;

/// Failures that stop the simulator with a non-zero exit code.
/// A backend panic is reported the same way whether it happens while the
/// window opens or later in the loop.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("window backend panicked: {0}")]
    Window(String),
}

impl InitError {
    /// Build a backend error from a caught panic payload.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown windowing failure".to_owned());
        Self::Window(message)
    }
}
