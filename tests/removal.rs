use wolf_ivp::{prelude::*, scenario};

mod common;
use common::rk45;

#[test]
fn removal_lowers_equilibrium() {
    let t = linspace(0.0, 60.0, 600);
    let harvested = LogisticRemoval {
        r: 0.3,
        k: 500.0,
        h: 10.0,
    };
    let untouched = LogisticRemoval { h: 0.0, ..harvested };

    let a = integrate(&harvested, &[50.0], &t, rk45()).unwrap();
    let b = integrate(&untouched, &[50.0], &t, rk45()).unwrap();
    let (_, pa) = a.last().unwrap();
    let (_, pb) = b.last().unwrap();

    assert!(pa[0] < pb[0]);
    assert!((pb[0] - 500.0).abs() < 0.5);
    // upper root of r*P*(1 - P/K) = h
    let upper = (0.3 + (0.09_f64 - 4.0 * 0.0006 * 10.0).sqrt()) / (2.0 * 0.0006);
    assert!((pa[0] - upper).abs() < 0.5, "settled at {}", pa[0]);
}

#[test]
fn removal_above_peak_growth_drives_extinction() {
    let m = LogisticRemoval {
        r: 0.3,
        k: 500.0,
        h: 40.0,
    };
    assert!(m.h > m.max_sustainable_removal());

    let t = linspace(0.0, 4.0, 41);
    let sol = integrate(&m, &[50.0], &t, rk45()).unwrap();
    assert_eq!(sol.status, Status::Success);

    let p = sol.component(0);
    assert!(p.windows(2).all(|w| w[1] < w[0]));
    assert!(p.iter().any(|&v| v <= 0.0));
}

#[test]
fn scenario_with_zero_removal_is_plain_logistic() {
    let plain = scenario::logistic().run().unwrap();
    let removal = scenario::removal(0.0).run().unwrap();
    assert_eq!(plain.y, removal.y);
}

#[test]
fn zero_capacity_is_propagated_not_raised() {
    let m = LogisticRemoval {
        r: 0.3,
        k: 0.0,
        h: 10.0,
    };
    let t = linspace(0.0, 10.0, 11);

    let euler = integrate(&m, &[50.0], &t, IntegrateOptions::euler(StepTime::Start)).unwrap();
    assert_eq!(euler.status, Status::Success);
    assert_eq!(euler.len(), 11);
    assert_eq!(euler.y[0], vec![50.0]);
    assert_eq!(euler.first_non_finite(), Some(1));

    let rk = integrate(&m, &[50.0], &t, rk45()).unwrap();
    assert_eq!(rk.status, Status::NonFiniteDerivative);
    assert_eq!(rk.len(), 11);
    assert_eq!(rk.y[0], vec![50.0]);
    assert!(rk.y[1..].iter().all(|row| row[0].is_nan()));
}
