//! Numerical integration of small ODE systems for wolf population models.
//!
//! The crate pairs a fixed-step explicit Euler driver with an adaptive
//! Dormand-Prince 5(4) driver and samples either one on a caller supplied
//! time grid. See [`solve::integrate`] for the high-level entry point and
//! [`models`] for the logistic, predator-prey, piecewise-capacity and removal
//! right-hand sides.

pub mod core;
pub mod error;
pub mod methods;
pub mod models;
pub mod prelude;
pub mod scenario;
pub mod solve;

pub use error::Error;

/// Floating point type used for time, state and tolerances.
pub type Float = f64;
