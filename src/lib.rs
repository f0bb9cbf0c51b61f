mod config;
mod dahlquist;
mod driver;
pub mod enums;
mod error;
mod integrator;
mod linear_drift;
mod model_trait;
mod problem;
mod sink;
mod trajectory;

pub use config::*;
pub use dahlquist::*;
pub use driver::*;
pub use enums::*;
pub use error::*;
pub use integrator::*;
pub use linear_drift::*;
pub use model_trait::*;
pub use problem::*;
pub use sink::*;
pub use trajectory::*;
