//! # pc-math
//!
//! Mathematical building blocks for the simulation pipeline:
//! probability distributions exposed through their inverse CDF, a
//! seedable Mersenne Twister uniform source, sample statistics and
//! percentiles, and a dense matrix newtype over nalgebra.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Dense two-dimensional matrix of reals.
pub mod matrix;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulator and percentiles.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_pdf, InverseCumulative, StandardNormal, StudentT};
pub use matrix::Matrix;
pub use random_numbers::MersenneTwisterUniformRng;
pub use statistics::{percentile, Statistics};
