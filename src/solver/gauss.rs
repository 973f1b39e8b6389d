//! Gaussian elimination with back substitution, without pivoting.
//!
//! The pivot at step `i` is always the current diagonal entry of the augmented matrix. No row
//! or column exchanges are made, so a zero (or tiny) pivot yields Inf/NaN in the result rather
//! than an error. Callers that prefer a signalled failure can enable
//! [`DirectOptions::detect_zero_pivot`], which reports [`SolveError::ZeroPivot`] instead.
//!
//! For a stable general-purpose solve use faer's `PartialPivLu`/`FullPivLu` directly.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.2

use crate::config::DirectOptions;
use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::core::wrappers::residual_norm;
use crate::error::SolveError;
use crate::matrix::dense::{augment, require_square};
use crate::matrix::vector::{VectorLike, column_of_len};
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use log::debug;
use num_traits::Float;

/// Direct solver by naive Gaussian elimination.
#[derive(Debug, Clone, Default)]
pub struct GaussSolver {
    pub opts: DirectOptions,
}

impl GaussSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, opts: DirectOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn with_zero_pivot_detection(mut self, flag: bool) -> Self {
        self.opts.detect_zero_pivot = flag;
        self
    }

    /// Solve `A x = b` and return `x`.
    ///
    /// # Errors
    /// * `InvalidInput` if `A` is empty or not square, or `b` does not have `n` entries.
    /// * `ZeroPivot` only when zero-pivot detection is enabled.
    pub fn solve_vec<M, T, B>(&self, a: &M, b: &B) -> Result<Vec<T>, SolveError>
    where
        M: MatrixGet<T> + MatShape,
        T: Float,
        B: VectorLike<T> + ?Sized,
    {
        let n = require_square(a)?;
        let b = column_of_len(b, n, "right-hand side")?;
        debug!("gauss: eliminating {}x{} system", n, n);

        let mut ab = augment(a, &b);

        // Forward elimination, row j <- row j - (ab[j][i] / ab[i][i]) * row i.
        for i in 0..n - 1 {
            let pivot = ab[(i, i)];
            if self.opts.detect_zero_pivot && pivot == T::zero() {
                return Err(SolveError::ZeroPivot(i));
            }
            for j in (i + 1)..n {
                let factor = ab[(j, i)] / pivot;
                if self.opts.detect_zero_pivot && !factor.is_finite() {
                    return Err(SolveError::ZeroPivot(i));
                }
                for k in 0..=n {
                    let v = ab[(j, k)] - factor * ab[(i, k)];
                    ab[(j, k)] = v;
                }
            }
        }

        // Back substitution on the upper-triangular part.
        if self.opts.detect_zero_pivot && ab[(n - 1, n - 1)] == T::zero() {
            return Err(SolveError::ZeroPivot(n - 1));
        }
        let mut x = vec![T::zero(); n];
        x[n - 1] = ab[(n - 1, n)] / ab[(n - 1, n - 1)];
        for i in (0..n - 1).rev() {
            let s = ((i + 1)..n).fold(T::zero(), |acc, k| acc + ab[(i, k)] * x[k]);
            x[i] = (ab[(i, n)] - s) / ab[(i, i)];
        }
        Ok(x)
    }
}

impl<M, T> LinearSolver<M, Vec<T>> for GaussSolver
where
    M: MatrixGet<T> + MatShape + MatVec<Vec<T>>,
    T: Float,
{
    type Error = SolveError;
    type Scalar = T;

    /// Solve Ax = b by elimination. The incoming `x` is ignored and overwritten.
    ///
    /// # Returns
    /// * `Ok(SolveStats)` with one iteration and the residual `‖A·x − b‖₂`, which is NaN/Inf
    ///   when elimination hit a zero pivot.
    fn solve(&mut self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, SolveError> {
        *x = self.solve_vec(a, b)?;
        Ok(SolveStats {
            iterations: 1,
            final_residual: residual_norm(a, x, b),
            converged: true,
        })
    }
}

/// Solve `A x = b` by naive Gaussian elimination with back substitution.
///
/// A zero pivot is not detected: the result then contains Inf/NaN.
pub fn solve_direct<M, T, B>(a: &M, b: &B) -> Result<Vec<T>, SolveError>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
    B: VectorLike<T> + ?Sized,
{
    GaussSolver::new().solve_vec(a, b)
}
