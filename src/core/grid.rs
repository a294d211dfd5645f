//! Time grids on which the solution is requested.

use crate::{Float, error::Error};

/// `num` evenly spaced points over `[start, stop]`, both ends included.
///
/// The last point is exactly `stop`, so drivers that clip their final step to
/// the grid end land on it bit for bit. `num == 1` yields `[start]` and
/// `num == 0` an empty grid; both are rejected later by [`validate`].
pub fn linspace(start: Float, stop: Float, num: usize) -> Vec<Float> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as Float;
            let mut t: Vec<Float> = (0..num).map(|i| start + i as Float * step).collect();
            t[num - 1] = stop;
            t
        }
    }
}

/// Check that `t` has at least two finite, strictly increasing points.
pub fn validate(t: &[Float]) -> Result<(), Error> {
    if t.len() < 2 {
        return Err(Error::GridTooShort(t.len()));
    }
    if let Some((index, &value)) = t.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::GridNotFinite { index, value });
    }
    for (i, w) in t.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(Error::GridNotIncreasing {
                index: i + 1,
                prev: w[0],
                value: w[1],
            });
        }
    }
    Ok(())
}
