//! Numerical methods

mod hinit;

pub mod dp;
pub mod euler;
pub mod result;
pub mod settings;

pub(crate) use hinit::hinit;
