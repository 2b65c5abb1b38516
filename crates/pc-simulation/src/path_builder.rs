//! Price path construction from return factors.

use pc_core::{ensure, Error, Price, Real, Result};
use pc_math::Matrix;
use rayon::prelude::*;

/// Build the `(horizon + 1) × iterations` price path matrix.
///
/// Row 0 broadcasts `starting_price` across all columns; row t is
/// row t−1 elementwise-multiplied by factor row t−1.  The fold along
/// time is strictly ordered per column, since each price depends on its
/// predecessor, while columns are independent and evolve on parallel
/// workers.  Prices that compound toward 0 or ∞ are legitimate
/// simulation outcomes and are left untouched.
pub fn build(factors: &Matrix, starting_price: Price) -> Result<Matrix> {
    ensure!(
        factors.rows() > 0 && factors.cols() > 0,
        Error::EmptyResult(format!(
            "path builder requires a non-empty factor matrix, got {} × {}",
            factors.rows(),
            factors.cols()
        ))
    );
    ensure!(
        starting_price.is_finite() && starting_price > 0.0,
        Error::Domain(format!(
            "path builder starting price must be positive and finite, got {starting_price}"
        ))
    );

    let horizon = factors.rows();
    let columns: Vec<Vec<Real>> = (0..factors.cols())
        .into_par_iter()
        .map(|j| {
            let mut path = Vec::with_capacity(horizon + 1);
            let mut price = starting_price;
            path.push(price);
            for factor in factors.column(j) {
                price *= factor;
                path.push(price);
            }
            path
        })
        .collect();

    Ok(Matrix::from_columns(horizon + 1, &columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_single_iteration() {
        let factors = Matrix::from_columns(1, &[vec![1.05]]);
        let paths = build(&factors, 100.0).unwrap();
        assert_eq!(paths.rows(), 2);
        assert_eq!(paths.cols(), 1);
        assert_eq!(paths.column(0), vec![100.0, 105.0]);
    }

    #[test]
    fn row_zero_is_the_starting_price_everywhere() {
        let factors = Matrix::from_element(4, 32, 1.01);
        let paths = build(&factors, 250.0).unwrap();
        assert_eq!(paths.row(0), vec![250.0; 32]);
    }

    #[test]
    fn recurrence_compounds_along_time() {
        let factors = Matrix::from_columns(3, &[vec![1.1, 0.5, 2.0], vec![1.0, 1.0, 1.0]]);
        let paths = build(&factors, 100.0).unwrap();
        assert_eq!(paths.column(0), vec![100.0, 110.0, 55.0, 110.0]);
        assert_eq!(paths.column(1), vec![100.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn underflow_and_overflow_are_representable() {
        // 200 halvings of a tiny price underflow to 0; that is an outcome,
        // not an error
        let factors = Matrix::from_element(200, 1, f64::MIN_POSITIVE);
        let paths = build(&factors, 1.0).unwrap();
        let terminal = paths.column(0)[200];
        assert_eq!(terminal, 0.0);

        let factors = Matrix::from_element(10, 1, f64::MAX);
        let paths = build(&factors, 1.0).unwrap();
        assert!(paths.column(0)[10].is_infinite());
    }

    #[test]
    fn empty_factor_matrix_is_rejected() {
        let factors = Matrix::zeros(0, 5);
        assert!(matches!(
            build(&factors, 100.0).unwrap_err(),
            Error::EmptyResult(_)
        ));
    }

    #[test]
    fn bad_starting_price_is_rejected() {
        let factors = Matrix::from_element(1, 1, 1.0);
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = build(&factors, price).unwrap_err();
            assert!(matches!(err, Error::Domain(_)), "price {price} gave {err:?}");
        }
    }
}
