//! Loading historical series from delimited text.
//!
//! The schema is fixed: `Date,Open,High,Low,Close,Adj Close,Volume` with
//! a header row and one record per trading day, dates ascending.
//! Anything that does not parse fails the load; nothing is coerced.

use crate::series::{DerivedSeries, PriceRecord};
use pc_core::{ensure, Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Column headers the loader requires.
pub const REQUIRED_HEADERS: [&str; 7] =
    ["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

/// Load a derived series for `symbol` from the CSV file at `path`.
pub fn load_series(path: impl AsRef<Path>, symbol: &str) -> Result<DerivedSeries> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::Io(format!("cannot open {}: {e}", path.display())))?;
    read_series(file, symbol)
}

/// Read a derived series for `symbol` from any CSV source.
pub fn read_series(reader: impl Read, symbol: &str) -> Result<DerivedSeries> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv
        .headers()
        .map_err(|e| Error::Schema(format!("cannot read header row: {e}")))?
        .clone();
    for required in REQUIRED_HEADERS {
        ensure!(
            headers.iter().any(|h| h == required),
            Error::Schema(format!("missing required column {required:?}"))
        );
    }

    let mut records: Vec<PriceRecord> = Vec::new();
    for (i, row) in csv.deserialize::<PriceRecord>().enumerate() {
        // line 1 is the header, so data row i sits on line i + 2
        let line = i + 2;
        let record = row.map_err(|e| Error::Schema(format!("line {line}: {e}")))?;
        ensure!(
            record.close.is_finite() && record.close > 0.0,
            Error::Schema(format!(
                "line {line}: close must be a positive number, got {}",
                record.close
            ))
        );
        if let Some(prev) = records.last() {
            ensure!(
                record.date > prev.date,
                Error::Schema(format!(
                    "line {line}: date {} does not advance past {}",
                    record.date, prev.date
                ))
            );
        }
        records.push(record);
    }
    ensure!(
        !records.is_empty(),
        Error::Schema("no data rows after the header".to_string())
    );

    info!(
        symbol,
        rows = records.len(),
        from = %records[0].date,
        to = %records[records.len() - 1].date,
        "loaded historical series"
    );
    Ok(DerivedSeries::from_records(symbol, &records))
}
