//! Student's t-distribution.
//!
//! Wraps the `statrs` implementation.  Offered as a fatter-tailed
//! alternative to the normal for the return-factor transform.

use crate::distributions::InverseCumulative;
use pc_core::{ensure, Error, Real, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Student's t-distribution with `df` degrees of freedom
/// (location 0, scale 1).
#[derive(Debug, Clone)]
pub struct StudentT {
    dist: StudentsT,
    df: Real,
}

impl StudentT {
    /// Create a Student-t distribution with the given degrees of freedom.
    pub fn new(df: Real) -> Result<Self> {
        ensure!(
            df.is_finite() && df > 0.0,
            Error::Domain(format!("degrees of freedom must be positive, got {df}"))
        );
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| Error::Domain(format!("Student-t with df {df}: {e}")))?;
        Ok(Self { dist, df })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> Real {
        self.df
    }
}

impl InverseCumulative for StudentT {
    fn inverse_cdf(&self, p: Real) -> Result<Real> {
        ensure!(
            p > 0.0 && p < 1.0,
            Error::Domain(format!(
                "inverse Student-t CDF requires p in the open interval (0, 1), got {p}"
            ))
        );
        Ok(self.dist.inverse_cdf(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::normal_cdf;

    #[test]
    fn median_is_zero() {
        let d = StudentT::new(5.0).unwrap();
        assert!(d.inverse_cdf(0.5).unwrap().abs() < 1e-9);
    }

    #[test]
    fn quantiles_are_symmetric() {
        let d = StudentT::new(4.0).unwrap();
        for p in [0.01, 0.1, 0.25] {
            let lo = d.inverse_cdf(p).unwrap();
            let hi = d.inverse_cdf(1.0 - p).unwrap();
            assert!((lo + hi).abs() < 1e-6, "q({p}) = {lo}, q({}) = {hi}", 1.0 - p);
        }
    }

    #[test]
    fn fatter_tails_than_normal() {
        let d = StudentT::new(3.0).unwrap();
        // extreme quantiles lie further out than the normal's
        let t99 = d.inverse_cdf(0.99).unwrap();
        assert!(normal_cdf(t99) > 0.99);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-2.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());

        let d = StudentT::new(5.0).unwrap();
        assert!(d.inverse_cdf(0.0).is_err());
        assert!(d.inverse_cdf(1.0).is_err());
    }
}
