//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use wolf_ivp::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `WithParams`, `Interpolate`, `SolOut`, `ControlFlag`, `Status`.
//! - Grid helpers: `linspace`.
//! - High-level API: `integrate`, `IntegrateOptions`, `Method`, `StepTime`, `Trajectory`.
//! - The wolf models.
//!

pub use crate::core::{
    grid::linspace,
    interpolate::Interpolate,
    ode::{ODE, WithParams},
    solout::{ControlFlag, SolOut},
    status::Status,
};
pub use crate::error::Error;
pub use crate::methods::{
    euler::StepTime,
    settings::{Settings, Tolerance},
};
pub use crate::models::{Logistic, LogisticRemoval, LotkaVolterra, PiecewiseLogistic};
pub use crate::solve::{IntegrateOptions, Method, Trajectory, integrate};
