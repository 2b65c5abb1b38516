//! # pc-data
//!
//! Historical series loading for pricecast.  Reads daily OHLCV records
//! from delimited text into a date-ascending series with derived return
//! columns.  The rest of the pipeline only relies on the guarantees made
//! here: ascending dates, positive closes, and missing (not zero) derived
//! fields on the first record.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Loading series from delimited text.
pub mod loader;

/// Price records and the derived series.
pub mod series;

pub use loader::{load_series, read_series};
pub use series::{DerivedRecord, DerivedSeries, PriceRecord};
