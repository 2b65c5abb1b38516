//! Historical price series with derived daily return columns.

use chrono::NaiveDate;
use pc_core::{Price, Real, Size};
use serde::Deserialize;

/// One raw daily observation as persisted by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceRecord {
    /// Trading day.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Opening price.
    #[serde(rename = "Open")]
    pub open: Price,
    /// Intraday high.
    #[serde(rename = "High")]
    pub high: Price,
    /// Intraday low.
    #[serde(rename = "Low")]
    pub low: Price,
    /// Closing price.
    #[serde(rename = "Close")]
    pub close: Price,
    /// Close adjusted for splits and dividends.
    #[serde(rename = "Adj Close")]
    pub adj_close: Price,
    /// Shares traded.
    #[serde(rename = "Volume")]
    pub volume: u64,
}

/// A daily observation reduced to its close plus derived return columns.
///
/// The first record of a series has no prior close, so its derived fields
/// are `None` — a missing value, never zero, which would otherwise bias
/// the return statistics toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRecord {
    /// Trading day.
    pub date: NaiveDate,
    /// Closing price.
    pub close: Price,
    /// `close[t] − close[t−1]`.
    pub change: Option<Real>,
    /// `change / close[t−1]`.
    pub pct_change: Option<Real>,
    /// `ln(1 + pct_change)`.
    pub log_return: Option<Real>,
}

/// A date-ascending series of derived daily observations for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    symbol: String,
    records: Vec<DerivedRecord>,
}

impl DerivedSeries {
    /// Derive the return columns from raw records.
    ///
    /// The input must already be date-ascending with positive closes; the
    /// loader validates both before calling this.
    pub fn from_records(symbol: &str, records: &[PriceRecord]) -> Self {
        let derived = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let prev = (i > 0).then(|| records[i - 1].close);
                let change = prev.map(|p| r.close - p);
                let pct_change = prev.map(|p| (r.close - p) / p);
                DerivedRecord {
                    date: r.date,
                    close: r.close,
                    change,
                    pct_change,
                    log_return: pct_change.map(|pc| (1.0 + pc).ln()),
                }
            })
            .collect();
        Self {
            symbol: symbol.to_string(),
            records: derived,
        }
    }

    /// Build from parallel slices of dates and closes.
    ///
    /// # Panics
    /// Panics if `dates.len() != closes.len()`.
    pub fn from_closes(symbol: &str, dates: &[NaiveDate], closes: &[Price]) -> Self {
        assert_eq!(
            dates.len(),
            closes.len(),
            "DerivedSeries: dates and closes must have the same length"
        );
        let records: Vec<PriceRecord> = dates
            .iter()
            .zip(closes.iter())
            .map(|(&date, &close)| PriceRecord {
                date,
                open: close,
                high: close,
                low: close,
                close,
                adj_close: close,
                volume: 0,
            })
            .collect();
        Self::from_records(symbol, &records)
    }

    /// The instrument symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of observations.
    pub fn len(&self) -> Size {
        self.records.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The derived records in date order.
    pub fn records(&self) -> &[DerivedRecord] {
        &self.records
    }

    /// The most recent close — the simulation's starting price.
    pub fn last_close(&self) -> Option<Price> {
        self.records.last().map(|r| r.close)
    }

    /// The earliest date, or `None` if empty.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// The latest date, or `None` if empty.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// The non-missing log-returns in date order.
    pub fn log_returns(&self) -> impl Iterator<Item = Real> + '_ {
        self.records.iter().filter_map(|r| r.log_return)
    }
}
