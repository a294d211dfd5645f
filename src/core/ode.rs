//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(x, y). The integrator repeatedly calls `ode` with the
/// current abscissa `x` and state `y` and expects you to fill `dydx` with the
/// derivative values. Implementations must be pure: the same `(x, y)` always
/// yields the same `dydx`.
///
/// # Example
///
/// ```
/// use wolf_ivp::prelude::*;
///
/// struct Decay { k: f64 }
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
///         dydx[0] = -self.k * y[0];
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]);
}

impl<T: ODE + ?Sized> ODE for &T {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) {
        (**self).ode(x, y, dydx)
    }
}

/// Binds an opaque parameter value to a plain right-hand side function.
///
/// The function receives the parameters by reference on every evaluation, so
/// a tuple such as `(r, k)` can be threaded through without defining a model
/// type.
///
/// ```
/// use wolf_ivp::prelude::*;
///
/// fn logistic(_t: f64, p: &[f64], dp: &mut [f64], &(r, k): &(f64, f64)) {
///     dp[0] = r * p[0] * (1.0 - p[0] / k);
/// }
///
/// let rhs = WithParams::new(logistic, (0.3, 500.0));
/// let mut dp = [0.0];
/// rhs.ode(0.0, &[50.0], &mut dp);
/// assert!((dp[0] - 13.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct WithParams<F, P> {
    f: F,
    params: P,
}

impl<F, P> WithParams<F, P>
where
    F: Fn(Float, &[Float], &mut [Float], &P),
{
    pub fn new(f: F, params: P) -> Self {
        Self { f, params }
    }

    pub fn params(&self) -> &P {
        &self.params
    }
}

impl<F, P> ODE for WithParams<F, P>
where
    F: Fn(Float, &[Float], &mut [Float], &P),
{
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) {
        (self.f)(x, y, dydx, &self.params)
    }
}
