use wolf_ivp::{prelude::*, scenario};

mod common;
use common::{tight, turning_points};

#[test]
fn populations_stay_positive() {
    let sol = scenario::predator_prey().run().unwrap();
    assert_eq!(sol.status, Status::Success);
    assert_eq!(sol.len(), 800);
    assert_eq!(sol.dim(), 2);
    for (t, y) in &sol {
        assert!(y[0] > 0.0 && y[1] > 0.0, "t = {t}: {y:?}");
    }
}

#[test]
fn wolf_trough_is_resolved() {
    let s = scenario::predator_prey();
    let sol = s.run().unwrap();
    let w_min = sol
        .component(0)
        .into_iter()
        .fold(f64::INFINITY, f64::min);
    // The wolf count bottoms out far below the default absolute tolerance.
    assert!(w_min > 0.0);
    assert!(w_min < 1e-8, "trough {w_min}");
    assert!(scenario::PREDATOR_PREY_ATOL[0] < w_min);
}

#[test]
fn both_series_turn() {
    let sol = scenario::predator_prey().run().unwrap();
    let w = sol.component(0);
    let e = sol.component(1);

    // W collapses under the large E population and recovers once E has
    // decayed below a/b; E peaks early and then declines.
    let (_, w_minima) = turning_points(&w);
    let (e_maxima, _) = turning_points(&e);
    assert!(w_minima >= 1);
    assert!(e_maxima >= 1);
    assert!(w[799] > w.iter().copied().fold(f64::INFINITY, f64::min));
}

#[test]
fn orbit_near_coexistence_oscillates() {
    let m = LotkaVolterra {
        a: 0.1,
        b: 0.01,
        c: 0.1,
        d: 0.005,
    };
    let [w_star, e_star] = m.coexistence();
    assert_eq!([w_star, e_star], [20.0, 10.0]);

    let t = linspace(0.0, 200.0, 2001);
    let sol = integrate(&m, &[30.0, 10.0], &t, tight()).unwrap();
    for series in [sol.component(0), sol.component(1)] {
        assert!(series.iter().all(|&v| v > 0.0));
        let (maxima, minima) = turning_points(&series);
        assert!(maxima >= 1, "no local maximum");
        assert!(minima >= 1, "no local minimum");
    }
}

#[test]
fn vector_tolerance_is_accepted() {
    let s = scenario::predator_prey();
    let options = IntegrateOptions::builder()
        .rtol([1e-8, 1e-8])
        .atol(vec![1e-12, 1e-8])
        .build();
    let sol = integrate(&s.model, &s.y0, &s.t, options).unwrap();
    assert_eq!(sol.status, Status::Success);
    assert!(sol.first_non_finite().is_none());
}
