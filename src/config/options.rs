//! API options for the direct and iterative solvers.
//!
//! Both option sets default to the naive reference behaviour: no pivot or breakdown
//! detection (NaN/Inf simply propagate into the result) and exact symmetry comparison.
//! Anything else must be switched on explicitly.

/// Options for Gaussian elimination.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectOptions {
    /// Fail with `ZeroPivot` instead of dividing by a zero diagonal entry.
    pub detect_zero_pivot: bool,
}

/// Options for conjugate gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CgOptions<T> {
    /// Allowed `|a_ij - a_ji|` in the symmetry check; zero means exact equality.
    pub symmetry_tol: T,

    /// Fail with `NumericalInstability` when `dᵀ A d` is zero or not finite.
    pub detect_breakdown: bool,
}

impl<T: num_traits::Float> Default for CgOptions<T> {
    fn default() -> Self {
        Self {
            symmetry_tol: T::zero(),
            detect_breakdown: false,
        }
    }
}
