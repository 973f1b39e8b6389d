//! Direct & iterative solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for the direct and iterative solvers.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd;
    /// Solve A·x = b, writing result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
}

pub mod gauss;
pub use gauss::{GaussSolver, solve_direct};

pub mod cg;
pub use cg::{CgSolver, IterativeOutcome, ResidualState, solve_iterative};
