//! DOPRI5 - Dormand–Prince 5(4) explicit Runge–Kutta integrator
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).
//!

use tracing::trace;

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        ode::ODE,
        solout::{ControlFlag, SolOut},
        status::Status,
    },
    error::Error,
    methods::{
        hinit,
        result::IntegrationResult,
        settings::{Settings, Tolerance},
    },
};

/// Dormand–Prince DOPRI5: explicit embedded Runge–Kutta 5(4) solver with
/// adaptive step-size control and dense output.
///
/// Integrates `y' = f(x, y)` from `x` to `xend`, advancing the state buffer
/// `y` in-place. When a `solout` hook is supplied, dense-output coefficients
/// are computed on every accepted step and handed to the hook as an
/// [`Interpolate`] implementation valid on `[xold, x]`.
///
/// # Arguments
/// - `f`: Right‑hand side implementing `ODE`.
/// - `x`, `xend`: Initial and final abscissa.
/// - `y`: Initial state; on return holds the state at the returned `x`.
/// - `rtol`, `atol`: Relative and absolute tolerances (see [`Tolerance`]).
/// - `solout`: Optional output hook.
/// - `settings`: Optional knobs; see [`Settings`] for the defaults.
///
/// # Returns
/// An [`IntegrationResult`] on success, or every input validation issue found.
/// Numerical trouble (non-finite derivatives, step-size collapse, too many
/// steps) is not an error: it ends the run early with the matching
/// [`Status`].
pub fn dopri5<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y: &mut [Float],
    rtol: &Tolerance,
    atol: &Tolerance,
    mut solout: Option<&mut S>,
    settings: &Settings,
) -> Result<IntegrationResult, Vec<Error>>
where
    F: ODE,
    S: SolOut,
{
    // --- Input Validation ---
    let mut errors: Vec<Error> = Vec::new();
    let n = y.len();

    if n == 0 {
        errors.push(Error::EmptyState);
    }
    if let Err(e) = rtol.check_dimension(n) {
        errors.push(e);
    }
    if let Err(e) = atol.check_dimension(n) {
        errors.push(e);
    }

    // Rounding Unit
    let uround = match settings.uround {
        Some(u) => {
            if u <= 1e-35 || u >= 1.0 {
                errors.push(Error::URoundOutOfRange(u));
            }
            u
        }
        None => 2.3e-16,
    };

    // Safety Factor
    let safety_factor = match settings.safety_factor {
        Some(s) => {
            if s >= 1.0 || s <= 1e-4 {
                errors.push(Error::SafetyFactorOutOfRange(s));
            }
            s
        }
        None => 0.9,
    };

    // Parameters for step size selection
    let scale_min = match settings.scale_min {
        Some(s) => {
            if !(s > 0.0 && s <= 1.0) {
                errors.push(Error::ScaleMinOutOfRange(s));
            }
            s
        }
        None => 0.2,
    };
    let scale_max = match settings.scale_max {
        Some(s) => {
            if !(s >= 1.0 && s.is_finite()) {
                errors.push(Error::ScaleMaxOutOfRange(s));
            }
            s
        }
        None => 10.0,
    };
    let facc1 = 1.0 / scale_min;
    let facc2 = 1.0 / scale_max;

    // Beta for step control stabilization
    let beta = match settings.beta {
        Some(b) => {
            if b > 0.2 {
                errors.push(Error::BetaTooLarge(b));
            }
            b.max(0.0)
        }
        None => 0.04,
    };

    // Maximum step size
    let hmax = match settings.hmax {
        Some(h) => h.abs(),
        None => (xend - x).abs(),
    };

    // Initial step size
    if let Some(h0) = settings.h0 {
        if h0 == 0.0 || !h0.is_finite() {
            errors.push(Error::InvalidStepSize(h0));
        }
    }

    // Maximum Number of Steps
    let nmax = settings.nmax.unwrap_or(100_000);
    if nmax == 0 {
        errors.push(Error::NMaxMustBePositive(nmax));
    }

    // Number of steps before performing a stiffness test
    let nstiff = settings.nstiff.unwrap_or(1000);
    if nstiff == 0 {
        errors.push(Error::NStiffMustBePositive(nstiff));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // --- Declarations ---
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut k5 = vec![0.0; n];
    let mut k6 = vec![0.0; n];
    let mut y1 = vec![0.0; n];
    let mut ysti = vec![0.0; n];
    let mut cont = vec![0.0; n * 5];
    let dense_output = solout.is_some();
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut nonstiff = 0;
    let mut hlamb: Float = 0.0;
    let mut iasti = 0;
    let mut fac11;
    let mut fac;
    let mut hnew;
    let mut xph;
    let mut nfev = 0;
    let mut nstep = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;
    let status;
    let expo1 = 0.2 - beta * 0.75;
    let posneg = if xend >= x { 1.0 } else { -1.0 };

    // --- Initializations ---
    f.ode(x, y, &mut k1);
    nfev += 1;
    let mut h = match settings.h0 {
        Some(h0) => h0.abs().min(hmax) * posneg,
        None => {
            nfev += 1;
            hinit(
                f, x, y, posneg, &k1, &mut k2, &mut y1, 5, hmax, atol, rtol,
            )
        }
    };

    // Initial SolOut call
    if let Some(solout) = solout.as_mut() {
        if solout.solout::<DenseOutput>(x, x, y, None) == ControlFlag::Interrupt {
            return Ok(IntegrationResult {
                x,
                h,
                status: Status::UserInterrupt,
                nfev,
                nstep,
                naccpt,
                nrejct,
            });
        }
    }

    if x == xend {
        return Ok(IntegrationResult {
            x,
            h,
            status: Status::Success,
            nfev,
            nstep,
            naccpt,
            nrejct,
        });
    }

    // --- Main integration loop ---
    loop {
        // A non-finite slope at an accepted state cannot be cured by shrinking h
        if k1.iter().any(|v| !v.is_finite()) {
            status = Status::NonFiniteDerivative;
            break;
        }

        // Check for maximum number of steps
        if nstep > nmax {
            status = Status::NeedLargerNMax;
            break;
        }

        // Check for underflow due to machine rounding
        if 0.1 * h.abs() <= x.abs() * uround || h == 0.0 {
            status = Status::StepSizeTooSmall;
            break;
        }

        // Adjust last step to land on xend
        if (x + 1.01 * h - xend) * posneg > 0.0 {
            h = xend - x;
            last = true;
        }

        nstep += 1;

        // Stage 2
        for i in 0..n {
            y1[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(x + C2 * h, &y1, &mut k2);

        // Stage 3
        for i in 0..n {
            y1[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        f.ode(x + C3 * h, &y1, &mut k3);

        // Stage 4
        for i in 0..n {
            y1[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        f.ode(x + C4 * h, &y1, &mut k4);

        // Stage 5
        for i in 0..n {
            y1[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        f.ode(x + C5 * h, &y1, &mut k5);

        // Stage 6
        for i in 0..n {
            ysti[i] =
                y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        xph = if last { xend } else { x + h };
        f.ode(x + h, &ysti, &mut k6);

        // Final stage
        for i in 0..n {
            y1[i] =
                y[i] + h * (A71 * k1[i] + A73 * k3[i] + A74 * k4[i] + A75 * k5[i] + A76 * k6[i]);
        }
        f.ode(x + h, &y1, &mut k2);
        nfev += 6;

        // Prepare last segment of dense output before recalculating k4
        if dense_output {
            for i in 0..n {
                cont[4 * n + i] = h
                    * (D1 * k1[i] + D3 * k3[i] + D4 * k4[i] + D5 * k5[i] + D6 * k6[i] + D7 * k2[i]);
            }
        }

        // K4 scaled for error estimate
        for i in 0..n {
            k4[i] =
                (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k2[i]) * h;
        }

        // Error estimation
        let mut err: Float = 0.0;
        for i in 0..n {
            let sk = atol[i] + rtol[i] * y[i].abs().max(y1[i].abs());
            err += (k4[i] / sk) * (k4[i] / sk);
        }
        err = (err / n as Float).sqrt();

        // Computation of hnew
        fac11 = err.powf(expo1);
        // Lund-Stabilization
        fac = fac11 / facold.powf(beta);
        // We require scale_min <= hnew/h <= scale_max
        fac = facc2.max(facc1.min(fac / safety_factor));
        hnew = h / fac;

        if err <= 1.0 {
            // Step accepted
            facold = err.max(1.0e-4);
            naccpt += 1;

            // Stiffness detection
            if (naccpt % nstiff == 0) || (iasti > 0) {
                let mut stnum: Float = 0.0;
                let mut stden: Float = 0.0;
                for i in 0..n {
                    let d1 = k2[i] - k6[i];
                    let d2 = y1[i] - ysti[i];
                    stnum += d1 * d1;
                    stden += d2 * d2;
                }
                if stden > 0.0 {
                    hlamb = h.abs() * (stnum / stden).sqrt();
                }
                if hlamb > 3.25 {
                    nonstiff = 0;
                    iasti += 1;
                    if iasti == 15 {
                        status = Status::ProbablyStiff;
                        break;
                    }
                } else {
                    nonstiff += 1;
                    if nonstiff == 6 {
                        iasti = 0;
                    }
                }
            }

            // Prepare dense output
            if dense_output {
                for i in 0..n {
                    let ydiff = y1[i] - y[i];
                    let bspl = h * k1[i] - ydiff;
                    cont[i] = y[i];
                    cont[n + i] = ydiff;
                    cont[2 * n + i] = bspl;
                    cont[3 * n + i] = -h * k2[i] + ydiff - bspl;
                }
            }

            // Update state variables
            k1.copy_from_slice(&k2);
            y.copy_from_slice(&y1);
            let xold = x;
            x = xph;

            if let Some(solout) = solout.as_mut() {
                let interpolator = DenseOutput {
                    cont: &cont,
                    xold,
                    h,
                };
                if solout.solout(xold, x, y, Some(&interpolator)) == ControlFlag::Interrupt {
                    status = Status::UserInterrupt;
                    break;
                }
            }

            // Normal exit
            if last {
                h = hnew;
                status = Status::Success;
                break;
            }

            // Check for step size limits
            if hnew.abs() > hmax {
                hnew = posneg * hmax;
            }

            // Prevent oscillations due to previous rejected step
            if reject {
                hnew = posneg * hnew.abs().min(h.abs());
                reject = false;
            }
        } else {
            // Step rejected
            hnew = h / facc1.min(fac11 / safety_factor);
            trace!(x, h, err, "dopri5 step rejected");
            reject = true;
            if naccpt >= 1 {
                nrejct += 1;
            }
            last = false;
        }
        h = hnew;
    }

    Ok(IntegrationResult {
        x,
        h,
        status,
        nfev,
        nstep,
        naccpt,
        nrejct,
    })
}

/// Continuous output function for DOPRI5
pub fn contdp5(xi: Float, yi: &mut [Float], cont: &[Float], xold: Float, h: Float) {
    let n = cont.len() / 5;
    let theta = (xi - xold) / h;
    let theta1 = 1.0 - theta;
    for i in 0..n {
        yi[i] = cont[i]
            + theta
                * (cont[n + i]
                    + theta1
                        * (cont[2 * n + i] + theta * (cont[3 * n + i] + theta1 * cont[4 * n + i])));
    }
}

/// Dense output interpolator for one accepted DOPRI5 step.
#[derive(Clone, Copy, Debug)]
pub struct DenseOutput<'a> {
    cont: &'a [Float],
    xold: Float,
    h: Float,
}

impl Interpolate for DenseOutput<'_> {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        contdp5(xi, yi, self.cont, self.xold, self.h);
    }
}

// DOPRI5 Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.8;
const C5: Float = 8.0 / 9.0;

const A21: Float = 0.2;
const A31: Float = 3.0 / 40.0;
const A32: Float = 9.0 / 40.0;
const A41: Float = 44.0 / 45.0;
const A42: Float = -56.0 / 15.0;
const A43: Float = 32.0 / 9.0;
const A51: Float = 19372.0 / 6561.0;
const A52: Float = -25360.0 / 2187.0;
const A53: Float = 64448.0 / 6561.0;
const A54: Float = -212.0 / 729.0;
const A61: Float = 9017.0 / 3168.0;
const A62: Float = -355.0 / 33.0;
const A63: Float = 46732.0 / 5247.0;
const A64: Float = 49.0 / 176.0;
const A65: Float = -5103.0 / 18656.0;
const A71: Float = 35.0 / 384.0;
const A73: Float = 500.0 / 1113.0;
const A74: Float = 125.0 / 192.0;
const A75: Float = -2187.0 / 6784.0;
const A76: Float = 11.0 / 84.0;

const E1: Float = 71.0 / 57600.0;
const E3: Float = -71.0 / 16695.0;
const E4: Float = 71.0 / 1920.0;
const E5: Float = -17253.0 / 339200.0;
const E6: Float = 22.0 / 525.0;
const E7: Float = -1.0 / 40.0;

const D1: Float = -12715105075.0 / 11282082432.0;
const D3: Float = 87487479700.0 / 32700410799.0;
const D4: Float = -10690763975.0 / 1880347072.0;
const D5: Float = 701980252875.0 / 199316789632.0;
const D6: Float = -1453857185.0 / 822651844.0;
const D7: Float = 69997945.0 / 29380423.0;

#[cfg(test)]
mod tests {
    use super::*;

    struct Decay;

    impl ODE for Decay {
        fn ode(&self, _x: Float, y: &[Float], dydx: &mut [Float]) {
            dydx[0] = -y[0];
        }
    }

    struct Midpoint {
        at: Float,
        value: Option<Float>,
    }

    impl SolOut for Midpoint {
        fn solout<I: Interpolate>(
            &mut self,
            xold: Float,
            x: Float,
            _y: &[Float],
            interpolator: Option<&I>,
        ) -> ControlFlag {
            if let Some(interp) = interpolator {
                if xold < self.at && self.at <= x {
                    let mut yi = [0.0];
                    interp.interpolate(self.at, &mut yi);
                    self.value = Some(yi[0]);
                }
            }
            ControlFlag::Continue
        }
    }

    #[test]
    fn decay_lands_on_xend() {
        let mut y = [1.0];
        let tol = Tolerance::from(1e-10);
        let res = dopri5(
            &Decay,
            0.0,
            5.0,
            &mut y,
            &tol,
            &tol,
            None::<&mut Midpoint>,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(res.status, Status::Success);
        assert_eq!(res.x, 5.0);
        assert!((y[0] - (-5.0 as Float).exp()).abs() < 1e-9);
    }

    #[test]
    fn dense_output_tracks_exact_solution() {
        let mut y = [1.0];
        let tol = Tolerance::from(1e-10);
        let mut probe = Midpoint {
            at: 2.345,
            value: None,
        };
        dopri5(
            &Decay,
            0.0,
            5.0,
            &mut y,
            &tol,
            &tol,
            Some(&mut probe),
            &Settings::default(),
        )
        .unwrap();
        let value = probe.value.unwrap();
        assert!((value - (-2.345 as Float).exp()).abs() < 1e-8);
    }

    #[test]
    fn step_scale_bounds_are_checked() {
        let mut y = [1.0];
        let tol = Tolerance::from(1e-6);
        let settings = Settings::builder().scale_min(0.0).scale_max(0.5).build();
        let errors = dopri5(
            &Decay,
            0.0,
            1.0,
            &mut y,
            &tol,
            &tol,
            None::<&mut Midpoint>,
            &settings,
        )
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                Error::ScaleMinOutOfRange(0.0),
                Error::ScaleMaxOutOfRange(0.5),
            ]
        );
        assert_eq!(y, [1.0]);
    }

    #[test]
    fn invalid_settings_are_all_reported() {
        let mut y = [1.0];
        let tol = Tolerance::from(1e-6);
        let settings = Settings::builder()
            .uround(2.0)
            .safety_factor(1.5)
            .beta(0.5)
            .nmax(0)
            .build();
        let errors = dopri5(
            &Decay,
            0.0,
            1.0,
            &mut y,
            &tol,
            &tol,
            None::<&mut Midpoint>,
            &settings,
        )
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                Error::URoundOutOfRange(2.0),
                Error::SafetyFactorOutOfRange(1.5),
                Error::BetaTooLarge(0.5),
                Error::NMaxMustBePositive(0),
            ]
        );
    }

    #[test]
    fn step_budget_is_enforced() {
        let mut y = [1.0];
        let tol = Tolerance::from(1e-12);
        let settings = Settings::builder().nmax(3).build();
        let res = dopri5(
            &Decay,
            0.0,
            50.0,
            &mut y,
            &tol,
            &tol,
            None::<&mut Midpoint>,
            &settings,
        )
        .unwrap();
        assert_eq!(res.status, Status::NeedLargerNMax);
        assert!(res.x < 50.0);
    }
}
