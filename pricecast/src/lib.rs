//! # pricecast
//!
//! Monte Carlo price forecasting from historical daily closes.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `pc-*` crates.
//!
//! ## Quick start
//!
//! ```no_run
//! use pricecast::data::load_series;
//! use pricecast::simulation::Forecast;
//!
//! # fn main() -> pricecast::core::Result<()> {
//! let series = load_series("acme.csv", "ACME")?;
//! let summary = Forecast::new(30, 10_000).with_seed(42).run(&series)?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pc_core as core;

/// Historical series loading.
pub use pc_data as data;

/// Distributions, random numbers, statistics, and matrices.
pub use pc_math as math;

/// The simulation pipeline.
pub use pc_simulation as simulation;
