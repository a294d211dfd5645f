//! Fixed-step explicit Euler driven directly by the output grid.

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        ode::ODE,
        solout::{ControlFlag, SolOut},
        status::Status,
    },
    methods::result::IntegrationResult,
};

/// Which end of a grid interval is handed to the right-hand side as `x`.
///
/// The state is always the one at the start of the interval; only the time
/// argument changes. Models that switch parameters on `x` see the switch one
/// step earlier with [`StepTime::End`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepTime {
    /// `f(t[i-1], y[i-1])`, the textbook explicit Euler step.
    #[default]
    Start,
    /// `f(t[i], y[i-1])`, the parameter lookup follows the current grid time.
    End,
}

/// Explicit Euler over the points of `t`, one step per grid interval:
///
/// `y[i] = y[i-1] + f(tau, y[i-1]) * (t[i] - t[i-1])`, with `tau` chosen by
/// `step_time`.
///
/// `t` is expected to be validated by the caller; nothing in the step formula
/// guards against non-finite derivatives, which flow into the state as-is.
pub fn euler<F, S>(
    f: &F,
    t: &[Float],
    y: &mut [Float],
    step_time: StepTime,
    mut solout: Option<&mut S>,
) -> IntegrationResult
where
    F: ODE,
    S: SolOut,
{
    let n = y.len();
    let mut dydx = vec![0.0; n];
    let mut yold = y.to_vec();
    let mut nfev = 0;
    let mut nstep = 0;
    let mut status = Status::Success;
    let mut x = t.first().copied().unwrap_or(0.0);
    let mut h = 0.0;

    if let Some(solout) = solout.as_mut() {
        if solout.solout::<Linear>(x, x, y, None) == ControlFlag::Interrupt {
            return IntegrationResult {
                x,
                h,
                status: Status::UserInterrupt,
                nfev,
                nstep,
                naccpt: nstep,
                nrejct: 0,
            };
        }
    }

    for w in t.windows(2) {
        let (xold, xnew) = (w[0], w[1]);
        h = xnew - xold;
        let tau = match step_time {
            StepTime::Start => xold,
            StepTime::End => xnew,
        };

        f.ode(tau, y, &mut dydx);
        nfev += 1;

        yold.copy_from_slice(y);
        for i in 0..n {
            y[i] += dydx[i] * h;
        }
        x = xnew;
        nstep += 1;

        if let Some(solout) = solout.as_mut() {
            let interpolator = Linear {
                xold,
                h,
                y0: &yold,
                y1: y,
            };
            if solout.solout(xold, x, y, Some(&interpolator)) == ControlFlag::Interrupt {
                status = Status::UserInterrupt;
                break;
            }
        }
    }

    IntegrationResult {
        x,
        h,
        status,
        nfev,
        nstep,
        naccpt: nstep,
        nrejct: 0,
    }
}

/// Straight line between the two ends of an Euler step, which is exactly the
/// path the method assumes.
pub struct Linear<'a> {
    xold: Float,
    h: Float,
    y0: &'a [Float],
    y1: &'a [Float],
}

impl Interpolate for Linear<'_> {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        let theta = (xi - self.xold) / self.h;
        for i in 0..self.y0.len() {
            yi[i] = self.y0[i] + theta * (self.y1[i] - self.y0[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Clock;

    // dy/dx = x, so the step time choice is visible in the result
    impl ODE for Clock {
        fn ode(&self, x: Float, _y: &[Float], dydx: &mut [Float]) {
            dydx[0] = x;
        }
    }

    struct Count(usize);

    impl SolOut for Count {
        fn solout<I: Interpolate>(
            &mut self,
            _xold: Float,
            _x: Float,
            _y: &[Float],
            _interpolator: Option<&I>,
        ) -> ControlFlag {
            self.0 += 1;
            if self.0 == 3 {
                ControlFlag::Interrupt
            } else {
                ControlFlag::Continue
            }
        }
    }

    #[test]
    fn step_time_selects_interval_end() {
        let t = [0.0, 1.0, 2.0, 3.0];

        let mut y = [0.0];
        let res = euler(&Clock, &t, &mut y, StepTime::Start, None::<&mut Count>);
        assert_eq!(y[0], 0.0 + 1.0 + 2.0);
        assert_eq!(res.nfev, 3);
        assert_eq!(res.x, 3.0);

        let mut y = [0.0];
        euler(&Clock, &t, &mut y, StepTime::End, None::<&mut Count>);
        assert_eq!(y[0], 1.0 + 2.0 + 3.0);
    }

    #[test]
    fn uneven_grid_uses_local_dt() {
        let t = [0.0, 0.5, 2.0];
        let mut y = [0.0];
        euler(&Clock, &t, &mut y, StepTime::End, None::<&mut Count>);
        assert_eq!(y[0], 0.5 * 0.5 + 2.0 * 1.5);
    }

    #[test]
    fn interrupt_stops_stepping() {
        let t = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0];
        let mut count = Count(0);
        let res = euler(&Clock, &t, &mut y, StepTime::Start, Some(&mut count));
        assert_eq!(res.status, Status::UserInterrupt);
        assert_eq!(res.nstep, 2);
        assert_eq!(res.x, 2.0);
    }
}
