//! Right-hand sides for the wolf population models.
//!
//! | Model | State | Derivative |
//! |---|---|---|
//! | [`Logistic`] | `[P]` | `r*P*(1 - P/K)` |
//! | [`LotkaVolterra`] | `[W, E]` | `a*W - b*W*E`, `-c*E + d*W*E` |
//! | [`PiecewiseLogistic`] | `[P]` | logistic with `K` switching at `t_change` |
//! | [`LogisticRemoval`] | `[P]` | `r*P*(1 - P/K) - h` |
//!
//! None of the models guard their algebra: a zero capacity divides by zero
//! and the resulting infinities are the model's answer.

mod logistic;
mod lotka_volterra;

pub use logistic::{Logistic, LogisticRemoval, PiecewiseLogistic};
pub use lotka_volterra::LotkaVolterra;
