//! Preset wolf scenarios: model constants, initial state, grid and method.

use crate::{
    Float,
    core::{grid::linspace, ode::ODE},
    error::Error,
    methods::euler::StepTime,
    models::{Logistic, LogisticRemoval, LotkaVolterra, PiecewiseLogistic},
    solve::{IntegrateOptions, Trajectory, integrate},
};

/// Growth rate shared by the logistic scenarios.
pub const GROWTH_RATE: Float = 0.3;
/// Carrying capacity shared by the logistic scenarios.
pub const CAPACITY: Float = 500.0;
/// Initial wolf count for the logistic scenarios.
pub const INITIAL_WOLVES: Float = 50.0;

/// Absolute tolerance `[W, E]` for the predator-prey scenario.
pub const PREDATOR_PREY_ATOL: [Float; 2] = [1e-40, 1e-8];

/// One runnable configuration: a model plus everything `integrate` needs.
#[derive(Clone, Debug)]
pub struct Scenario<M> {
    pub name: &'static str,
    pub model: M,
    pub y0: Vec<Float>,
    pub t: Vec<Float>,
    pub options: IntegrateOptions,
}

impl<M: ODE> Scenario<M> {
    pub fn run(&self) -> Result<Trajectory, Error> {
        integrate(&self.model, &self.y0, &self.t, self.options.clone())
    }
}

/// Logistic growth, `r = 0.3`, `K = 500`, `P0 = 50` over `[0, 40]`.
pub fn logistic() -> Scenario<Logistic> {
    Scenario {
        name: "logistic",
        model: Logistic {
            r: GROWTH_RATE,
            k: CAPACITY,
        },
        y0: vec![INITIAL_WOLVES],
        t: linspace(0.0, 40.0, 400),
        options: IntegrateOptions::default(),
    }
}

/// Wolves and elk, `[W0, E0] = [40, 800]` over `[0, 80]`.
pub fn predator_prey() -> Scenario<LotkaVolterra> {
    Scenario {
        name: "predator-prey",
        model: LotkaVolterra {
            a: 0.1,
            b: 0.01,
            c: 0.1,
            d: 0.005,
        },
        y0: vec![40.0, 800.0],
        t: linspace(0.0, 80.0, 800),
        // W bottoms out near 1e-32; its absolute tolerance has to sit below
        // that or step control stops seeing it and W overshoots through zero.
        options: IntegrateOptions::builder()
            .atol(PREDATOR_PREY_ATOL)
            .build(),
    }
}

/// Capacity falls from 500 to 300 at `t = 20`, integrated with fixed-step
/// Euler that looks the capacity up at the current grid time.
pub fn piecewise_capacity() -> Scenario<PiecewiseLogistic> {
    Scenario {
        name: "piecewise-capacity",
        model: PiecewiseLogistic {
            r: GROWTH_RATE,
            k_high: CAPACITY,
            k_low: 300.0,
            t_change: 20.0,
        },
        y0: vec![INITIAL_WOLVES],
        t: linspace(0.0, 40.0, 400),
        options: IntegrateOptions::euler(StepTime::End),
    }
}

/// Logistic growth with `removal` wolves taken per unit time over `[0, 40]`.
pub fn removal(removal: Float) -> Scenario<LogisticRemoval> {
    Scenario {
        name: "removal",
        model: LogisticRemoval {
            r: GROWTH_RATE,
            k: CAPACITY,
            h: removal,
        },
        y0: vec![INITIAL_WOLVES],
        t: linspace(0.0, 40.0, 400),
        options: IntegrateOptions::default(),
    }
}
