use crate::{Float, core::ode::ODE};

/// Logistic growth toward a carrying capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Logistic {
    /// Intrinsic growth rate.
    pub r: Float,
    /// Carrying capacity.
    pub k: Float,
}

impl Logistic {
    /// dP/dt at population `p`.
    pub fn growth(&self, p: Float) -> Float {
        logistic_growth(self.r, self.k, p)
    }

    /// Closed-form solution from `p0` at time 0.
    pub fn exact(&self, p0: Float, t: Float) -> Float {
        self.k * p0 / (p0 + (self.k - p0) * (-self.r * t).exp())
    }
}

impl ODE for Logistic {
    fn ode(&self, _x: Float, y: &[Float], dydx: &mut [Float]) {
        dydx[0] = self.growth(y[0]);
    }
}

/// Logistic growth whose capacity drops from `k_high` to `k_low` at
/// `t_change`, e.g. after habitat loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiecewiseLogistic {
    pub r: Float,
    pub k_high: Float,
    pub k_low: Float,
    pub t_change: Float,
}

impl PiecewiseLogistic {
    /// Capacity in force at time `t`; the switch itself belongs to `k_low`.
    pub fn capacity_at(&self, t: Float) -> Float {
        if t < self.t_change {
            self.k_high
        } else {
            self.k_low
        }
    }

    pub fn growth(&self, t: Float, p: Float) -> Float {
        logistic_growth(self.r, self.capacity_at(t), p)
    }
}

impl ODE for PiecewiseLogistic {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]) {
        dydx[0] = self.growth(x, y[0]);
    }
}

/// Logistic growth minus a constant removal (hunting, culling) of `h`
/// individuals per unit time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticRemoval {
    pub r: Float,
    pub k: Float,
    pub h: Float,
}

impl LogisticRemoval {
    /// Peak of the logistic term, `r*K/4`, reached at `P = K/2`. A removal
    /// rate above it exceeds growth at every population size.
    pub fn max_sustainable_removal(&self) -> Float {
        self.r * self.k / 4.0
    }

    pub fn growth(&self, p: Float) -> Float {
        logistic_growth(self.r, self.k, p) - self.h
    }
}

impl ODE for LogisticRemoval {
    fn ode(&self, _x: Float, y: &[Float], dydx: &mut [Float]) {
        dydx[0] = self.growth(y[0]);
    }
}

fn logistic_growth(r: Float, k: Float, p: Float) -> Float {
    r * p * (1.0 - p / k)
}
