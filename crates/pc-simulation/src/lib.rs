//! # pc-simulation
//!
//! The Monte Carlo pipeline: return statistics estimation, random
//! return-factor generation, price path construction, and percentile
//! summarization.  Data flows strictly estimator → generator → builder →
//! summarizer; each stage produces an immutable value consumed by
//! reference downstream.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Return statistics estimated from a historical series.
pub mod estimator;

/// Random return-factor generation.
pub mod generator;

/// Forecast orchestration.
pub mod model;

/// Price path construction from return factors.
pub mod path_builder;

/// Percentile summary of simulated price paths.
pub mod summarizer;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use estimator::{estimate, ColumnStatistics};
pub use generator::generate;
pub use model::Forecast;
pub use path_builder::build;
pub use summarizer::{summarize, SimulationSummary};
