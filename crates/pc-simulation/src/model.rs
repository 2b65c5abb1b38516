//! Forecast orchestration.

use crate::{estimator, generator, path_builder, summarizer, SimulationSummary};
use pc_core::{Error, Result, Size};
use pc_data::DerivedSeries;
use pc_math::{InverseCumulative, StandardNormal};
use std::sync::Arc;
use tracing::debug;

/// A configured Monte Carlo price forecast.
///
/// Owns the simulation parameters and wires the pipeline stages in
/// order: estimate → generate → build → summarize.  Each stage hands an
/// immutable value to the next and the model keeps no state between
/// runs, so a `Forecast` can be reused and shared freely.
pub struct Forecast {
    horizon: Size,
    iterations: Size,
    distribution: Arc<dyn InverseCumulative>,
    seed: Option<u64>,
}

impl Forecast {
    /// Create a forecast with the standard normal distribution and an
    /// entropy-derived seed.
    pub fn new(horizon: Size, iterations: Size) -> Self {
        Self {
            horizon,
            iterations,
            distribution: Arc::new(StandardNormal),
            seed: None,
        }
    }

    /// Replace the distribution driving the return-factor transform.
    pub fn with_distribution(mut self, distribution: Arc<dyn InverseCumulative>) -> Self {
        self.distribution = distribution;
        self
    }

    /// Fix the master seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the full pipeline over a historical series.
    pub fn run(&self, series: &DerivedSeries) -> Result<SimulationSummary> {
        let stats = estimator::estimate(series)?;
        debug!(
            mean = stats.mean,
            deviation = stats.deviation,
            drift = stats.drift,
            "estimated return statistics"
        );

        let starting_price = series.last_close().ok_or_else(|| {
            Error::InsufficientData(format!(
                "series {} has no closing prices",
                series.symbol()
            ))
        })?;

        let factors = generator::generate(
            self.horizon,
            self.iterations,
            self.distribution.as_ref(),
            stats.drift,
            stats.deviation,
            self.seed,
        )?;
        let paths = path_builder::build(&factors, starting_price)?;
        summarizer::summarize(&paths, starting_price)
    }
}
