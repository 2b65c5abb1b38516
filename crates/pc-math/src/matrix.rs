//! Dense two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`.  The simulation stores
//! time steps as rows and iterations as columns; nalgebra's column-major
//! layout keeps each simulated trajectory contiguous in memory.

use nalgebra::DMatrix;
use pc_core::{Real, Size};
use std::ops::{Index, IndexMut};

/// A dynamically-sized 2D matrix of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: Size, cols: Size) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create a matrix filled with `value`.
    pub fn from_element(rows: Size, cols: Size, value: Real) -> Self {
        Self(DMatrix::from_element(rows, cols, value))
    }

    /// Create from column-major data (nalgebra's native layout).
    pub fn from_column_slice(rows: Size, cols: Size, data: &[Real]) -> Self {
        Self(DMatrix::from_column_slice(rows, cols, data))
    }

    /// Assemble from per-column vectors, each of length `rows`.
    ///
    /// # Panics
    /// Panics if any column's length differs from `rows`.
    pub fn from_columns(rows: Size, columns: &[Vec<Real>]) -> Self {
        let mut data = Vec::with_capacity(rows * columns.len());
        for column in columns {
            assert_eq!(
                column.len(),
                rows,
                "Matrix: every column must have {rows} entries"
            );
            data.extend_from_slice(column);
        }
        Self(DMatrix::from_column_slice(rows, columns.len(), &data))
    }

    /// Number of rows.
    pub fn rows(&self) -> Size {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> Size {
        self.0.ncols()
    }

    /// Copy of row `i`.
    pub fn row(&self, i: Size) -> Vec<Real> {
        self.0.row(i).iter().copied().collect()
    }

    /// Copy of column `j`.
    pub fn column(&self, j: Size) -> Vec<Real> {
        self.0.column(j).iter().copied().collect()
    }
}

impl Index<(Size, Size)> for Matrix {
    type Output = Real;

    fn index(&self, (i, j): (Size, Size)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(Size, Size)> for Matrix {
    fn index_mut(&mut self, (i, j): (Size, Size)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}
