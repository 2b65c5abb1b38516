//! Probability distributions driving the return-factor transform.
//!
//! The pipeline requires exactly one capability of a distribution:
//! mapping a uniform sample through its inverse CDF.  Anything
//! implementing [`InverseCumulative`] plugs into the generator; the
//! standard normal is the default and a Student-t is available for
//! fatter tails.

pub mod normal;
pub mod student_t;

use pc_core::{Real, Result};

/// A continuous probability distribution exposed through its inverse CDF.
pub trait InverseCumulative: Send + Sync {
    /// Map a probability `p` in the open interval (0, 1) to the quantile
    /// of the distribution.
    ///
    /// The endpoints map to ±∞ and are rejected with
    /// [`pc_core::Error::Domain`] rather than clamped; so is anything
    /// outside the interval, NaN included.
    fn inverse_cdf(&self, p: Real) -> Result<Real>;
}

pub use normal::{normal_cdf, normal_pdf, StandardNormal};
pub use student_t::StudentT;
