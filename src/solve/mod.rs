//! High-level solve module: grid-sampled integration split into submodules.

pub mod integrate;
pub mod options;
pub mod solout;
pub mod trajectory;

pub use integrate::integrate;
pub use options::{IntegrateOptions, Method};
pub use trajectory::Trajectory;
