//! Sample statistics: an incremental accumulator and percentiles.

use pc_core::{Real, Size};

/// Incremental statistics accumulator.
///
/// Accumulates samples and computes count, mean, sample variance, and
/// standard deviation.  Variance is Bessel-corrected (divides by n − 1);
/// the deviation is the square root of that same quantity, so the pair is
/// always consistent.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    count: Size,
    sum: Real,
    sum_sq: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Number of samples.
    pub fn samples(&self) -> Size {
        self.count
    }

    /// Mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then(|| self.sum / self.count as Real)
    }

    /// Sample variance (Bessel-corrected).  Returns `None` for fewer than
    /// 2 samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let mean = self.sum / n;
        Some((self.sum_sq - n * mean * mean) / (n - 1.0))
    }

    /// Standard deviation.  Returns `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }
}

/// Percentile of a sample using linear interpolation between order
/// statistics: `rank = p/100 · (n − 1)`, interpolating between the
/// adjacent sorted values.
///
/// Sorts `values` in place.  Returns `None` for an empty sample or `p`
/// outside `[0, 100]`.
pub fn percentile(values: &mut [Real], p: Real) -> Option<Real> {
    if values.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    if n == 1 {
        return Some(values[0]);
    }

    let rank = (p / 100.0) * (n as Real - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    Some(if lower == upper {
        values[lower]
    } else {
        let w = rank - lower as Real;
        values[lower] * (1.0 - w) + values[upper] * w
    })
}
