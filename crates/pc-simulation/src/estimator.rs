//! Return statistics estimated from a historical series.

use pc_core::{Error, Real, Result};
use pc_data::DerivedSeries;
use pc_math::Statistics;

/// Drift and dispersion of a series' daily log-returns.
///
/// Variance and deviation are the sample (Bessel-corrected) pair.
/// `drift = mean − variance/2` converts the mean log-return into the
/// geometric growth rate of the exponential recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistics {
    /// Sample variance of the log-returns.
    pub variance: Real,
    /// Sample standard deviation of the log-returns.
    pub deviation: Real,
    /// Mean log-return.
    pub mean: Real,
    /// `mean − variance/2`.
    pub drift: Real,
}

/// Estimate log-return statistics over `series`, ignoring missing values.
///
/// Fails with [`Error::InsufficientData`] when fewer than two non-missing
/// log-returns exist: the variance is undefined.  Pure function, no side
/// effects.
pub fn estimate(series: &DerivedSeries) -> Result<ColumnStatistics> {
    let mut acc = Statistics::new();
    for r in series.log_returns() {
        acc.add(r);
    }

    let (Some(mean), Some(variance)) = (acc.mean(), acc.variance()) else {
        return Err(Error::InsufficientData(format!(
            "estimator needs at least 2 log-returns, found {} in series {}",
            acc.samples(),
            series.symbol()
        )));
    };

    Ok(ColumnStatistics {
        variance,
        deviation: variance.sqrt(),
        mean,
        drift: mean - 0.5 * variance,
    })
}
