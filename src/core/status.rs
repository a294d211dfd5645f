//! Status codes for integrators

/// Terminal state of an integration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the requested interval.
    Success,
    /// A [`crate::core::solout::SolOut`] hook asked to stop.
    UserInterrupt,
    /// More than `nmax` steps were needed.
    NeedLargerNMax,
    /// The step size fell below the rounding floor of the current abscissa.
    StepSizeTooSmall,
    /// The stiffness test fired repeatedly.
    ProbablyStiff,
    /// The right-hand side returned a non-finite derivative at an accepted state.
    NonFiniteDerivative,
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}
