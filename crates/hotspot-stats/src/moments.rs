//! Numerically stable sums and sample moments.

/// Neumaier-compensated running sum.
///
/// Keeps a running correction term so that long sums of mixed-magnitude
/// terms lose far less precision than naive accumulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    /// Empty sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one term.
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Current total.
    pub fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

/// Two-pass sample moments of a value vector.
///
/// `m2` is the sum of squared deviations from the mean, computed after the
/// mean is known, so it is unaffected by a large common offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    /// Number of values.
    pub n: usize,
    /// Arithmetic mean (0 for an empty vector).
    pub mean: f64,
    /// Sum of squared deviations from the mean.
    pub m2: f64,
    /// Smallest value (`+inf` for an empty vector).
    pub min: f64,
    /// Largest value (`-inf` for an empty vector).
    pub max: f64,
}

impl Moments {
    /// Compute moments of `values`.
    pub fn of(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                n,
                mean: 0.0,
                m2: 0.0,
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            };
        }
        let mean = values.iter().copied().collect::<CompensatedSum>().total() / n as f64;
        let m2 = values
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .collect::<CompensatedSum>()
            .total();
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Self {
            n,
            mean,
            m2,
            min,
            max,
        }
    }

    /// `true` when every value is identical (or there are none).
    ///
    /// Tested on the exact range rather than `m2`: a constant vector can
    /// have a tiny non-zero `m2` from rounding in the mean.
    pub fn is_constant(&self) -> bool {
        self.n == 0 || self.min == self.max
    }

    /// Deviations `v - mean` for each value.
    pub fn deviations(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| v - self.mean).collect()
    }
}
