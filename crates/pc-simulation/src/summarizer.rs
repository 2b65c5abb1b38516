//! Percentile summary of simulated price paths.

use pc_core::{ensure, Error, Price, Real, Result, Size};
use pc_math::{percentile, Matrix};
use std::fmt;

/// Percentile of terminal prices reported as the worst case.
const WORST_P: Real = 5.0;
/// Percentile of terminal prices reported as the average case.
const AVERAGE_P: Real = 50.0;
/// Percentile of terminal prices reported as the best case.
const BEST_P: Real = 95.0;

/// Percentile summary of the simulated terminal price distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSummary {
    /// The last known close all paths start from.
    pub starting_price: Price,
    /// Simulated horizon in days.
    pub horizon: Size,
    /// Number of independent paths.
    pub iterations: Size,
    /// 5th percentile terminal price.
    pub worst_case: Price,
    /// Worst case as a percentage change from the starting price.
    pub worst_case_pct: Real,
    /// Median terminal price.
    pub average_case: Price,
    /// Average case as a percentage change from the starting price.
    pub average_case_pct: Real,
    /// 95th percentile terminal price.
    pub best_case: Price,
    /// Best case as a percentage change from the starting price.
    pub best_case_pct: Real,
}

/// Summarize a completed price path matrix.
///
/// Percentiles over the terminal row use linear interpolation between
/// order statistics (`rank = p/100 · (n − 1)`); different conventions
/// yield different numbers, so the rule is part of the contract and is
/// pinned by test.  Fails with [`Error::EmptyResult`] on zero iterations
/// or zero simulated time steps.
pub fn summarize(prices: &Matrix, starting_price: Price) -> Result<SimulationSummary> {
    ensure!(
        prices.cols() > 0,
        Error::EmptyResult("summarizer got zero iterations".to_string())
    );
    // a single row is just the broadcast starting price; nothing simulated
    ensure!(
        prices.rows() > 1,
        Error::EmptyResult("summarizer got zero simulated time steps".to_string())
    );

    let mut terminal = prices.row(prices.rows() - 1);
    let (Some(worst), Some(average), Some(best)) = (
        percentile(&mut terminal, WORST_P),
        percentile(&mut terminal, AVERAGE_P),
        percentile(&mut terminal, BEST_P),
    ) else {
        return Err(Error::EmptyResult(
            "summarizer found no terminal prices".to_string(),
        ));
    };

    let pct = |case: Price| (case - starting_price) * 100.0 / starting_price;
    Ok(SimulationSummary {
        starting_price,
        horizon: prices.rows() - 1,
        iterations: prices.cols(),
        worst_case: worst,
        worst_case_pct: pct(worst),
        average_case: average,
        average_case_pct: pct(average),
        best_case: best,
        best_case_pct: pct(best),
    })
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "starting price      {:>12.2}", self.starting_price)?;
        writeln!(f, "horizon             {:>9} days", self.horizon)?;
        writeln!(f, "iterations          {:>12}", self.iterations)?;
        writeln!(
            f,
            "worst case   (P5)   {:>12.2}  {:>+8.2}%",
            self.worst_case, self.worst_case_pct
        )?;
        writeln!(
            f,
            "average case (P50)  {:>12.2}  {:>+8.2}%",
            self.average_case, self.average_case_pct
        )?;
        write!(
            f,
            "best case    (P95)  {:>12.2}  {:>+8.2}%",
            self.best_case, self.best_case_pct
        )
    }
}
