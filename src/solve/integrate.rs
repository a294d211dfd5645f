//! Grid-sampled integrate entry point implementation

use tracing::{debug, warn};

use crate::{
    Float,
    core::{grid, ode::ODE},
    error::Error,
    methods::{dp::dopri5, euler::euler},
};

use super::{
    options::{IntegrateOptions, Method},
    solout::GridSolOut,
    trajectory::Trajectory,
};

/// Integrate `f` from `t[0]` to the last grid point and report the state at
/// every grid time.
///
/// The returned [`Trajectory`] has exactly `t.len()` rows and its first row
/// is `y0`. Input problems (short or non-increasing grid, empty state,
/// mismatched tolerances, bad settings) fail with an [`Error`] before `f` is
/// called. Numerical trouble does not: non-finite values produced by the
/// model stay visible in the rows, and an adaptive run that has to stop early
/// reports why in [`Trajectory::status`] with the unreached rows set to NaN.
///
/// # Example
///
/// ```
/// use wolf_ivp::prelude::*;
///
/// let wolves = Logistic { r: 0.3, k: 500.0 };
/// let t = linspace(0.0, 40.0, 400);
/// let sol = integrate(&wolves, &[50.0], &t, IntegrateOptions::default()).unwrap();
/// assert_eq!(sol.len(), 400);
/// let (_, last) = sol.last().unwrap();
/// assert!((last[0] - 500.0).abs() < 5.0);
/// ```
pub fn integrate<F>(
    f: &F,
    y0: &[Float],
    t: &[Float],
    options: IntegrateOptions,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    grid::validate(t)?;
    if y0.is_empty() {
        return Err(Error::EmptyState);
    }

    let dim = y0.len();
    debug!(
        method = ?options.method,
        points = t.len(),
        dim,
        t0 = t[0],
        tend = t[t.len() - 1],
        "starting integration"
    );

    let mut y = y0.to_vec();
    let mut sampler = GridSolOut::new(t);

    let result = match options.method {
        Method::Euler => euler(f, t, &mut y, options.step_time, Some(&mut sampler)),
        Method::RK45 => {
            options.rtol.check_dimension(dim)?;
            options.atol.check_dimension(dim)?;
            dopri5(
                f,
                t[0],
                t[t.len() - 1],
                &mut y,
                &options.rtol,
                &options.atol,
                Some(&mut sampler),
                &options.settings,
            )
            .map_err(Error::InvalidSettings)?
        }
    };

    let reached = sampler.recorded();
    let trajectory = Trajectory {
        t: t.to_vec(),
        y: sampler.into_rows(dim),
        nfev: result.nfev,
        nstep: result.nstep,
        naccpt: result.naccpt,
        nrejct: result.nrejct,
        status: result.status,
    };

    debug!(
        status = ?trajectory.status,
        nfev = trajectory.nfev,
        naccpt = trajectory.naccpt,
        nrejct = trajectory.nrejct,
        "integration finished"
    );
    if !trajectory.status.is_success() {
        warn!(
            status = ?trajectory.status,
            x = result.x,
            reached,
            points = t.len(),
            "integration stopped early; unreached rows are NaN"
        );
    } else if let Some(row) = trajectory.first_non_finite() {
        warn!(row, t = t[row], "trajectory contains non-finite values");
    }

    Ok(trajectory)
}
