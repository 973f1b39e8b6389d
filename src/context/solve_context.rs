//! Factory for the dense solvers.
//!
//! `SolveContext` holds the system matrix, the solver kind, and the parameters of both solvers.
//! `solve_context` dispatches to the selected solver through the `LinearSolver` trait.

use crate::config::{CgOptions, DirectOptions};
use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::SolveError;
use crate::solver::{CgSolver, GaussSolver, LinearSolver};
use crate::utils::convergence::SolveStats;
use num_traits::Float;

/// Enum representing the available solver types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Naive Gaussian elimination with back substitution
    Gauss,
    /// Conjugate Gradient (CG) method (for SPD matrices)
    Cg,
}

/// Context and configuration for a linear solve.
pub struct SolveContext<M, T> {
    pub kind: SolverKind,
    /// The system matrix
    pub a: M,
    /// Absolute residual tolerance (CG only)
    pub tol: T,
    /// Maximum number of iterations (CG only)
    pub max_it: usize,
    pub direct: DirectOptions,
    pub cg: CgOptions<T>,
}

impl<M, T> SolveContext<M, T>
where
    M: MatrixGet<T> + MatShape + MatVec<Vec<T>>,
    T: Float,
{
    pub fn new(kind: SolverKind, a: M, tol: T, max_it: usize) -> Self {
        Self {
            kind,
            a,
            tol,
            max_it,
            direct: DirectOptions::default(),
            cg: CgOptions::default(),
        }
    }

    /// Solve the linear system `Ax = b` using the configured solver.
    ///
    /// # Arguments
    /// * `b` - Right-hand side vector
    /// * `x` - Initial guess for CG (ignored by Gauss); overwritten with the result
    ///
    /// # Returns
    /// * `Ok(SolveStats)`; for CG `converged` is false when the iteration budget ran out
    /// * `Err(SolveError)` on invalid input or a non-SPD matrix given to CG
    pub fn solve_context(
        &mut self,
        b: &Vec<T>,
        x: &mut Vec<T>,
    ) -> Result<SolveStats<T>, SolveError> {
        match self.kind {
            SolverKind::Gauss => {
                let mut solver = GaussSolver::new().with_options(self.direct);
                solver.solve(&self.a, b, x)
            }
            SolverKind::Cg => {
                let mut solver = CgSolver::new(self.tol, self.max_it).with_options(self.cg);
                solver.solve(&self.a, b, x)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    fn spd() -> Mat<f64> {
        let rows = [[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        Mat::from_fn(3, 3, |i, j| rows[i][j])
    }

    #[test]
    fn both_kinds_agree_on_spd_system() {
        let b = vec![6.0, 8.0, 8.0];
        let mut x_gauss = vec![0.0; 3];
        let mut x_cg = vec![0.0; 3];
        SolveContext::new(SolverKind::Gauss, spd(), 1e-12, 50)
            .solve_context(&b, &mut x_gauss)
            .unwrap();
        let stats = SolveContext::new(SolverKind::Cg, spd(), 1e-12, 50)
            .solve_context(&b, &mut x_cg)
            .unwrap();
        assert!(stats.converged);
        for (g, c) in x_gauss.iter().zip(&x_cg) {
            assert!((g - c).abs() < 1e-10, "gauss = {}, cg = {}", g, c);
        }
    }

    #[test]
    fn cg_context_reports_budget_exhaustion() {
        let mut x = vec![0.0; 3];
        let stats = SolveContext::new(SolverKind::Cg, spd(), 1e-12, 1)
            .solve_context(&vec![6.0, 8.0, 8.0], &mut x)
            .unwrap();
        assert!(!stats.converged);
        assert_eq!(stats.iterations, 1);
        assert!(x.iter().any(|&v| v != 0.0));
    }
}
