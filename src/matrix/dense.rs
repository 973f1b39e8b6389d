//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from raw column-major storage or from nested rows, plus the augmented
//! matrix used by Gaussian elimination.

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::SolveError;
use faer::Mat;
use num_traits::Float;

/// Dense matrix that can be built from plain storage.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + MatShape + Sized {
    /// Construct from raw column-major storage. `data` must hold exactly `nrows * ncols` entries.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, SolveError>;

    /// Construct from row-major nested rows. All rows must have the same length.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self, SolveError>;
}

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
impl<T: Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, SolveError> {
        if data.len() != nrows * ncols {
            return Err(SolveError::InvalidInput(format!(
                "raw storage has {} entries, expected {}x{}",
                data.len(),
                nrows,
                ncols
            )));
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i]))
    }

    fn from_rows(rows: &[Vec<T>]) -> Result<Self, SolveError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(SolveError::InvalidInput(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                ncols
            )));
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i][j]))
    }
}

/// Rejects empty and non-square matrices.
pub fn require_square<M: MatShape>(a: &M) -> Result<usize, SolveError> {
    let (n, m) = (a.nrows(), a.ncols());
    if n == 0 {
        return Err(SolveError::InvalidInput("matrix is empty".into()));
    }
    if n != m {
        return Err(SolveError::InvalidInput(format!(
            "matrix must be square, got {}x{}",
            n, m
        )));
    }
    Ok(n)
}

/// Horizontally concatenates `a` (n×n) and `b` (length n) into the n×(n+1) augmented matrix.
pub fn augment<M, T>(a: &M, b: &[T]) -> Mat<T>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    let n = a.nrows();
    Mat::from_fn(n, n + 1, |i, j| if j < n { a.get(i, j) } else { b[i] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_row_major() {
        let a: Mat<f64> = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a[(0, 1)], 2.0);
        assert_eq!(a[(1, 0)], 3.0);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let res: Result<Mat<f64>, _> = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(res, Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn from_raw_is_column_major() {
        let a: Mat<f64> = DenseMatrix::from_raw(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
        assert_eq!(a[(0, 1)], 2.0);
        assert_eq!(a[(1, 0)], 3.0);
    }

    #[test]
    fn from_raw_rejects_short_storage() {
        let res: Result<Mat<f64>, _> = DenseMatrix::from_raw(2, 2, vec![1.0, 2.0, 3.0]);
        assert!(matches!(res, Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn augment_appends_rhs_column() {
        let a: Mat<f64> = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let ab = augment(&a, &[5.0, 6.0]);
        assert_eq!((ab.nrows(), ab.ncols()), (2, 3));
        assert_eq!(ab[(0, 2)], 5.0);
        assert_eq!(ab[(1, 2)], 6.0);
        assert_eq!(ab[(1, 1)], 4.0);
    }

    #[test]
    fn require_square_rejects_rectangular_and_empty() {
        let a = Mat::<f64>::zeros(2, 3);
        assert!(matches!(require_square(&a), Err(SolveError::InvalidInput(_))));
        let e = Mat::<f64>::zeros(0, 0);
        assert!(matches!(require_square(&e), Err(SolveError::InvalidInput(_))));
    }
}
