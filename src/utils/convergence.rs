//! Convergence tracking & tolerance checks for iterative solvers.

use crate::error::SolveError;

/// Stopping criteria & stats.
#[derive(Clone, Debug)]
pub struct Convergence<T> {
    /// Absolute threshold on the residual norm `‖r‖₂`.
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// `tol` must be positive and finite, `max_iters` at least one.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(self.tol > T::zero()) || !self.tol.is_finite() {
            return Err(SolveError::InvalidInput(
                "tolerance must be positive and finite".into(),
            ));
        }
        if self.max_iters == 0 {
            return Err(SolveError::InvalidInput(
                "iteration cap must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Returns (should_stop, stats) given current `res_norm` after iteration `i`.
    ///
    /// The criterion is absolute: `res_norm < tol`.
    pub fn check(&self, res_norm: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = res_norm < self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: res_norm,
                converged,
            },
        )
    }
}
