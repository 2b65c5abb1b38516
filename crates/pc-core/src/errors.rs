//! Error types for pricecast.
//!
//! The whole pipeline shares a single `thiserror`-derived enum.  Every
//! variant is fatal: a failed stage propagates to the caller carrying the
//! offending value in its message, and the run aborts without producing a
//! partial summary.

use thiserror::Error;

/// The top-level error type used throughout pricecast.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input row or header did not match the expected schema.
    #[error("schema error: {0}")]
    Schema(String),

    /// Too few historical observations to estimate return statistics.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A probability or parameter outside its valid domain.
    #[error("domain error: {0}")]
    Domain(String),

    /// A zero-sized simulation was requested.
    #[error("empty result: {0}")]
    EmptyResult(String),

    /// The data source could not be read.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Shorthand `Result` type used throughout pricecast.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error unless `$cond` holds.
///
/// # Example
/// ```
/// use pc_core::{ensure, Error};
/// fn positive(x: f64) -> pc_core::Result<f64> {
///     ensure!(x > 0.0, Error::Domain(format!("x must be positive, got {x}")));
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let e = Error::Schema("row 3: bad close".to_string());
        assert_eq!(e.to_string(), "schema error: row 3: bad close");

        let e = Error::Domain("p must be in (0, 1), got 1".to_string());
        assert!(e.to_string().starts_with("domain error"));
    }

    #[test]
    fn ensure_short_circuits() {
        fn check(n: usize) -> Result<usize> {
            crate::ensure!(n > 0, Error::EmptyResult(format!("got {n}")));
            Ok(n)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(check(0), Err(Error::EmptyResult("got 0".to_string())));
    }
}
