//! # Example: the four wolf scenarios
//!
//! Runs logistic growth, wolves and elk, a capacity drop and constant removal,
//! printing every 50th row of each trajectory.
//!
//! Run with `RUST_LOG=debug` to see solver statistics.
//!

use tracing_subscriber::EnvFilter;
use wolf_ivp::{prelude::*, scenario};

fn report(name: &str, sol: &Trajectory) {
    println!("== {name} ({:?}) ==", sol.status);
    println!(
        "steps: {} (accepted {} / rejected {}), evaluations: {}",
        sol.nstep, sol.naccpt, sol.nrejct, sol.nfev
    );
    for (t, y) in sol.iter().step_by(50) {
        println!("t = {:>6.2}, y = {:?}", t, y);
    }
    if let Some((t, y)) = sol.last() {
        println!("t = {:>6.2}, y = {:?}", t, y);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runs = [
        ("logistic", scenario::logistic().run()),
        ("predator-prey", scenario::predator_prey().run()),
        ("piecewise-capacity", scenario::piecewise_capacity().run()),
        ("removal h=10", scenario::removal(10.0).run()),
        ("removal h=40", scenario::removal(40.0).run()),
    ];

    for (name, run) in runs {
        match run {
            Ok(sol) => report(name, &sol),
            Err(e) => eprintln!("{name} failed: {e}"),
        }
    }
}
