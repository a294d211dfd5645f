use crate::{Float, core::ode::ODE};

/// Lotka-Volterra pair with state `[W, E]`: `W` grows at rate `a` and is
/// consumed at `b*W*E`; `E` dies at rate `c` and grows at `d*W*E`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LotkaVolterra {
    pub a: Float,
    pub b: Float,
    pub c: Float,
    pub d: Float,
}

impl LotkaVolterra {
    /// Coexistence point `[c/d, a/b]` around which orbits cycle.
    pub fn coexistence(&self) -> [Float; 2] {
        [self.c / self.d, self.a / self.b]
    }
}

impl ODE for LotkaVolterra {
    fn ode(&self, _x: Float, y: &[Float], dydx: &mut [Float]) {
        let (w, e) = (y[0], y[1]);
        dydx[0] = self.a * w - self.b * w * e;
        dydx[1] = -self.c * e + self.d * w * e;
    }
}
