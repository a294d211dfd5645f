//! Grid sampling SolOut: records the solution at each requested time.

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        solout::{ControlFlag, SolOut},
    },
};

/// Samples the solution at every grid point as the integrator passes it.
///
/// A grid point that coincides with a step end is copied from the step's
/// state; points strictly inside a step are read from the method's
/// interpolant.
pub struct GridSolOut<'a> {
    grid: &'a [Float],
    next_idx: usize,
    y: Vec<Vec<Float>>,
}

impl<'a> GridSolOut<'a> {
    pub fn new(grid: &'a [Float]) -> Self {
        Self {
            grid,
            next_idx: 0,
            y: Vec::with_capacity(grid.len()),
        }
    }

    /// Number of grid points recorded so far.
    pub fn recorded(&self) -> usize {
        self.y.len()
    }

    /// Rows for every grid point. Points the integrator never reached are
    /// filled with NaN so the output always matches the grid length.
    pub fn into_rows(self, dim: usize) -> Vec<Vec<Float>> {
        let mut y = self.y;
        y.resize(self.grid.len(), vec![Float::NAN; dim]);
        y
    }
}

impl SolOut for GridSolOut<'_> {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: Option<&I>,
    ) -> ControlFlag {
        let mut i = self.next_idx;
        while i < self.grid.len() && self.grid[i] <= x {
            let t = self.grid[i];
            match interpolator {
                Some(interp) if t != x && t > xold => {
                    let mut yi = vec![0.0; y.len()];
                    interp.interpolate(t, &mut yi);
                    self.y.push(yi);
                }
                _ => self.y.push(y.to_vec()),
            }
            i += 1;
        }
        self.next_idx = i;
        ControlFlag::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        xold: Float,
        h: Float,
    }

    impl Interpolate for Ramp {
        fn interpolate(&self, xi: Float, yi: &mut [Float]) {
            yi[0] = (xi - self.xold) / self.h;
        }
    }

    #[test]
    fn samples_inside_and_at_step_ends() {
        let grid = [0.0, 0.25, 0.5, 1.0, 1.5];
        let mut out = GridSolOut::new(&grid);
        out.solout::<Ramp>(0.0, 0.0, &[0.0], None);
        let ramp = Ramp { xold: 0.0, h: 1.0 };
        out.solout(0.0, 1.0, &[1.0], Some(&ramp));
        assert_eq!(out.recorded(), 4);

        let rows = out.into_rows(1);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![0.0]);
        assert_eq!(rows[1], vec![0.25]);
        assert_eq!(rows[2], vec![0.5]);
        assert_eq!(rows[3], vec![1.0]);
        assert!(rows[4][0].is_nan());
    }
}
