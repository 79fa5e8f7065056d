//! Rank-ordered profiles of simulated surfaces.
//!
//! A profile column is a surface rescaled to `[0, 1]` and sorted from
//! highest to lowest. Averaging profiles across trials gives the expected
//! rank-order curve of a neutral surface, against which an observed
//! surface's own profile can be compared.

use ndarray::{Array2, ArrayViewMut1};

/// Rescale `values` in place to `[0, 1]` by their range.
///
/// A constant vector becomes all zeros.
pub fn unit_scale(values: &mut [f64]) {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = hi - lo;
    for v in values.iter_mut() {
        *v = if range > 0.0 { (*v - lo) / range } else { 0.0 };
    }
}

/// `values` unit-scaled and sorted in descending order.
pub fn rank_profile(mut values: Vec<f64>) -> Vec<f64> {
    unit_scale(&mut values);
    values.sort_unstable_by(|a, b| b.total_cmp(a));
    values
}

/// Running sum of per-trial profiles, added in trial order.
pub(crate) struct ProfileAccumulator {
    sums: Array2<f64>,
    trials: usize,
}

impl ProfileAccumulator {
    pub(crate) fn new(sites: usize, columns: usize) -> Self {
        Self {
            sums: Array2::zeros((sites, columns)),
            trials: 0,
        }
    }

    /// Add one trial: one profile per column.
    pub(crate) fn add(&mut self, columns: &[Vec<f64>]) {
        for (col, profile) in columns.iter().enumerate() {
            add_into(self.sums.column_mut(col), profile);
        }
        self.trials += 1;
    }

    /// Across-trial mean.
    pub(crate) fn mean(self) -> Array2<f64> {
        let trials = self.trials.max(1) as f64;
        self.sums / trials
    }
}

fn add_into(mut dst: ArrayViewMut1<'_, f64>, src: &[f64]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}
