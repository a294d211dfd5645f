//! Errors for integration methods

use thiserror::Error;

use crate::Float;

/// Input validation errors. Every variant is raised before the first
/// right-hand side evaluation; numerical trouble during integration is
/// reported through [`crate::core::status::Status`] instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("time grid needs at least 2 points (got {0})")]
    GridTooShort(usize),
    #[error("time grid value t[{index}] is not finite (got {value})")]
    GridNotFinite { index: usize, value: Float },
    #[error("time grid must be strictly increasing (t[{index}] = {value} follows {prev})")]
    GridNotIncreasing {
        index: usize,
        prev: Float,
        value: Float,
    },
    #[error("initial state must have at least one component")]
    EmptyState,
    #[error("tolerance has {got} components but the state has {expected}")]
    ToleranceDimension { expected: usize, got: usize },
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),
    #[error("nstiff must be positive (got {0})")]
    NStiffMustBePositive(usize),
    #[error("uround must be in (1e-35, 1.0) (got {0})")]
    URoundOutOfRange(Float),
    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("scale_min must be in (0, 1] (got {0})")]
    ScaleMinOutOfRange(Float),
    #[error("scale_max must be finite and >= 1 (got {0})")]
    ScaleMaxOutOfRange(Float),
    #[error("beta must be <= 0.2 (got {0})")]
    BetaTooLarge(Float),
    #[error("step size must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    #[error("invalid integrator settings: {}", join(.0))]
    InvalidSettings(Vec<Error>),
}

fn join(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
