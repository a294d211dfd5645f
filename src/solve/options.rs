//! Options and method selection for integrate

use bon::Builder;

use crate::{
    Float,
    methods::{
        euler::StepTime,
        settings::{Settings, Tolerance},
    },
};

/// Default relative and absolute tolerance, the square root of `f64` epsilon.
pub const DEFAULT_TOL: Float = 1.49012e-8;

/// Integration method selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Dormand–Prince 5(4) adaptive RK with dense output
    #[default]
    RK45,
    /// Fixed-step explicit Euler, one step per grid interval
    Euler,
}

#[derive(Builder, Clone, Debug)]
/// Options for [`crate::solve::integrate`]
pub struct IntegrateOptions {
    /// Method to use. Default: RK45 (Dormand–Prince 5(4)).
    #[builder(default)]
    pub method: Method,
    /// Relative tolerance for error estimation. Ignored by Euler.
    #[builder(default = Tolerance::Scalar(DEFAULT_TOL), into)]
    pub rtol: Tolerance,
    /// Absolute tolerance for error estimation. Ignored by Euler.
    #[builder(default = Tolerance::Scalar(DEFAULT_TOL), into)]
    pub atol: Tolerance,
    /// Time argument used for each Euler step. Ignored by RK45.
    #[builder(default)]
    pub step_time: StepTime,
    /// Step-size control knobs for RK45.
    #[builder(default)]
    pub settings: Settings,
}

impl Default for IntegrateOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl IntegrateOptions {
    /// Fixed-step Euler with the given step time and no other overrides.
    pub fn euler(step_time: StepTime) -> Self {
        Self::builder()
            .method(Method::Euler)
            .step_time(step_time)
            .build()
    }
}
