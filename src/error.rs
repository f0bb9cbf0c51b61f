use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the integrator, the sinks and the configuration loader
#[derive(Debug, Error)]
pub enum Error {
    #[error("step size must be positive and finite (got dx = {0})")]
    InvalidStepSize(f64),

    #[error("step size dx = {dx} does not advance x over [{x0}, {x1}]")]
    StepTooSmall { dx: f64, x0: f64, x1: f64 },

    #[error("interval bounds must be finite (got x0 = {x0}, x1 = {x1})")]
    NonFiniteInterval { x0: f64, x1: f64 },

    #[error("parameter '{0}' not found")]
    MissingParameter(&'static str),

    #[error("cannot create output {}", .path.display())]
    CreateSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open configuration file {}", .path.display())]
    OpenConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration")]
    Config(#[from] serde_yaml::Error),
}
