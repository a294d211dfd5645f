#![allow(dead_code)]

use wolf_ivp::prelude::*;

/// Interior turning points of a series: (local maxima, local minima).
pub fn turning_points(series: &[f64]) -> (usize, usize) {
    let mut maxima = 0;
    let mut minima = 0;
    for w in series.windows(3) {
        if w[1] > w[0] && w[1] >= w[2] {
            maxima += 1;
        }
        if w[1] < w[0] && w[1] <= w[2] {
            minima += 1;
        }
    }
    (maxima, minima)
}

/// Reference loop for the piecewise scenario: capacity chosen from the
/// current grid time, state taken from the previous row.
pub fn piecewise_reference(m: &PiecewiseLogistic, p0: f64, t: &[f64]) -> Vec<f64> {
    let mut p = vec![p0; t.len()];
    for i in 1..t.len() {
        let dt = t[i] - t[i - 1];
        let k = if t[i] < m.t_change { m.k_high } else { m.k_low };
        let dp = m.r * p[i - 1] * (1.0 - p[i - 1] / k);
        p[i] = p[i - 1] + dp * dt;
    }
    p
}

pub fn rk45() -> IntegrateOptions {
    IntegrateOptions::default()
}

pub fn tight() -> IntegrateOptions {
    IntegrateOptions::builder().rtol(1e-10).atol(1e-10).build()
}
