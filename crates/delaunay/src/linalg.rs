//! Linear algebra kernel: a column matrix over dynamically-sized real
//! vectors, plus the determinant-sign operation the predicates consume.
//!
//! Dimension `d` is a runtime parameter of a triangulation, so the matrix
//! here is backed by [`nalgebra::DMatrix`] rather than a fixed-size type.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// A matrix built from equal-length column vectors.
#[derive(Clone, Debug)]
pub struct Matrix {
    columns: DMatrix<f64>,
}

impl Matrix {
    /// Build a matrix from its columns. Fails with [`Error::DimensionMismatch`]
    /// if the columns disagree in length, or if the input is empty.
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self> {
        let height = columns
            .first()
            .map(Vec::len)
            .ok_or(Error::DimensionMismatch {
                expected: 1,
                found: 0,
            })?;
        for col in columns {
            if col.len() != height {
                return Err(Error::DimensionMismatch {
                    expected: height,
                    found: col.len(),
                });
            }
        }
        let width = columns.len();
        let data: Vec<f64> = columns.iter().flatten().copied().collect();
        Ok(Self {
            columns: DMatrix::from_column_slice(height, width, &data),
        })
    }

    pub fn width(&self) -> usize {
        self.columns.ncols()
    }

    pub fn height(&self) -> usize {
        self.columns.nrows()
    }

    /// The determinant. Requires a square matrix.
    pub fn determinant(&self) -> f64 {
        debug_assert_eq!(self.width(), self.height(), "determinant of non-square matrix");
        self.columns.clone().determinant()
    }

    /// The sign of the determinant, in {-1, 0, 1}. This is the only output
    /// the geometric predicates consume.
    pub fn sign_det(&self) -> i32 {
        let det = self.determinant();
        if det > 0.0 {
            1
        } else if det < 0.0 {
            -1
        } else {
            0
        }
    }

    pub fn as_nalgebra(&self) -> &DMatrix<f64> {
        &self.columns
    }
}
