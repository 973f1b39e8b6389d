//! Normalisation of vector-like inputs to a canonical column `Vec<T>`.

use crate::error::SolveError;
use faer::{Mat, MatRef};
use num_traits::Float;

/// Anything that can stand in for a right-hand side or an initial guess.
///
/// Slices, vectors and arrays are already columns. A faer matrix is accepted in either
/// orientation (`n×1` or `1×n`); any other shape is rejected.
pub trait VectorLike<T> {
    fn to_column(&self) -> Result<Vec<T>, SolveError>;
}

impl<T: Copy> VectorLike<T> for [T] {
    fn to_column(&self) -> Result<Vec<T>, SolveError> {
        Ok(self.to_vec())
    }
}

impl<T: Copy> VectorLike<T> for Vec<T> {
    fn to_column(&self) -> Result<Vec<T>, SolveError> {
        Ok(self.clone())
    }
}

impl<T: Copy, const N: usize> VectorLike<T> for [T; N] {
    fn to_column(&self) -> Result<Vec<T>, SolveError> {
        Ok(self.to_vec())
    }
}

impl<'a, T: Float> VectorLike<T> for MatRef<'a, T> {
    fn to_column(&self) -> Result<Vec<T>, SolveError> {
        let (r, c) = (self.nrows(), self.ncols());
        if c == 1 {
            Ok((0..r).map(|i| self[(i, 0)]).collect())
        } else if r == 1 {
            Ok((0..c).map(|j| self[(0, j)]).collect())
        } else {
            Err(SolveError::InvalidInput(format!(
                "expected a row or column vector, got {}x{} matrix",
                r, c
            )))
        }
    }
}

impl<T: Float> VectorLike<T> for Mat<T> {
    fn to_column(&self) -> Result<Vec<T>, SolveError> {
        self.as_ref().to_column()
    }
}

/// Normalises `v` and checks that its length is `n`.
pub fn column_of_len<T, V>(v: &V, n: usize, what: &str) -> Result<Vec<T>, SolveError>
where
    V: VectorLike<T> + ?Sized,
{
    let col = v.to_column()?;
    if col.len() != n {
        return Err(SolveError::InvalidInput(format!(
            "{} has length {}, expected {}",
            what,
            col.len(),
            n
        )));
    }
    Ok(col)
}
