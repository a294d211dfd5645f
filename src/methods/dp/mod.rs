//! Dormand-Prince Runge Kutta methods

mod dopri5;

pub use dopri5::{DenseOutput, contdp5, dopri5};
