//! # Example: Logistic growth with a parameter tuple
//!
//! Solve dP/dt = r*P*(1 - P/K) with the parameters passed as a tuple and
//! compare against the closed-form solution on the requested grid.
//!

use wolf_ivp::prelude::*;

fn logistic(_t: f64, p: &[f64], dp: &mut [f64], &(r, k): &(f64, f64)) {
    dp[0] = r * p[0] * (1.0 - p[0] / k);
}

fn main() {
    let (r, k, p0) = (0.3, 500.0, 50.0);
    let rhs = WithParams::new(logistic, (r, k));
    let t = linspace(0.0, 40.0, 41);

    let options = IntegrateOptions::builder().rtol(1e-9).atol(1e-9).build();

    match integrate(&rhs, &[p0], &t, options) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Number of function evaluations: {}", sol.nfev);
            for (ti, yi) in &sol {
                let exact = k * p0 / (p0 + (k - p0) * (-r * ti).exp());
                println!("t = {:>5.1}, P = {:>12.6}, exact = {:>12.6}", ti, yi[0], exact);
            }
        }
        Err(e) => eprintln!("integration failed: {e}"),
    }
}
