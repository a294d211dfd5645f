//! User defined callback hook executed after each accepted step.

use crate::{Float, core::interpolate::Interpolate};

/// Return flags for [`SolOut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    /// Proceed with integration as normal.
    Continue,
    /// Stop integration and return control to the caller.
    Interrupt,
}

/// Callback hook executed once before the first step (with `xold == x`) and
/// after every accepted step.
///
/// The arguments are:
/// - `xold`: left end of the last accepted step,
/// - `x`: the new abscissa after the accepted step,
/// - `y`: the integrator's current solution at `x`,
/// - `interpolator`: continuous extension of the solution over `[xold, x]`,
///   `None` on the initial call.
///
/// Typical uses are sampling the solution on a grid (see
/// [`crate::solve::solout::GridSolOut`]) or stopping early on a condition.
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: Option<&I>,
    ) -> ControlFlag;
}
