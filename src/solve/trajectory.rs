//! Trajectory returned by integrate: sampled data, stats, and accessors.

use crate::{Float, core::status::Status};

/// Solution sampled on the requested time grid.
///
/// `y[i]` is the state at `t[i]`; `t` is the grid passed to
/// [`crate::solve::integrate`] and `y[0]` is the initial state. Rows past an
/// early stop (see [`Trajectory::status`]) are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub t: Vec<Float>,
    pub y: Vec<Vec<Float>>,
    pub nfev: usize,
    pub nstep: usize,
    pub naccpt: usize,
    pub nrejct: usize,
    pub status: Status,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// State dimension.
    pub fn dim(&self) -> usize {
        self.y.first().map_or(0, Vec::len)
    }

    /// Time series of one state component, e.g. the wolf count.
    pub fn component(&self, index: usize) -> Vec<Float> {
        self.y.iter().map(|row| row[index]).collect()
    }

    /// The last sample.
    pub fn last(&self) -> Option<(Float, &[Float])> {
        Some((*self.t.last()?, self.y.last()?.as_slice()))
    }

    /// Index of the first row holding a NaN or infinity.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.y
            .iter()
            .position(|row| row.iter().any(|v| !v.is_finite()))
    }

    /// Iterate over stored sample pairs (t_i, y_i).
    pub fn iter(&self) -> TrajectoryIter<'_> {
        TrajectoryIter {
            t_iter: self.t.iter(),
            y_iter: self.y.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = (Float, &'a [Float]);
    type IntoIter = TrajectoryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over (t, y) pairs of a [`Trajectory`].
pub struct TrajectoryIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Vec<Float>>,
}

impl<'a> Iterator for TrajectoryIter<'a> {
    type Item = (Float, &'a [Float]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.y_iter.next()) {
            (Some(&t), Some(y)) => Some((t, y.as_slice())),
            _ => None,
        }
    }
}
