//! Conjugate Gradient (unpreconditioned) per Saad §6.1, with SPD validation.
//!
//! Before iterating, `A` is checked for symmetry (exact by default) and for positive
//! definiteness through its leading principal minors. A matrix failing either check is
//! rejected with [`SolveError::NotSymmetricPositiveDefinite`] and no iteration is run.
//!
//! The recurrence uses the residual convention `r = A·x − b` with `d₀ = −r₀` and the
//! Fletcher–Reeves update `d ← −r + (δ_new/δ_old)·d`. Convergence is declared when
//! `‖r‖₂ < tol` (absolute). Exhausting `max_iters` is not an error: the last estimate is
//! returned as [`IterativeOutcome::MaxIterationsExceeded`].

use crate::config::CgOptions;
use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
use crate::error::SolveError;
use crate::matrix::dense::require_square;
use crate::matrix::spd::{first_nonpositive_minor, is_symmetric};
use crate::matrix::vector::{VectorLike, column_of_len};
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveStats};
use log::{debug, trace, warn};
use num_traits::Float;

/// Latest CG state `(x_m, r_m, d_m, δ_m)`; updated in place each iteration.
#[derive(Clone, Debug)]
pub struct ResidualState<T> {
    pub x: Vec<T>,
    pub r: Vec<T>,
    pub d: Vec<T>,
    /// Squared residual norm `r·r`.
    pub delta: T,
}

impl<T: Float> ResidualState<T> {
    /// `r₀ = A·x₀ − b`, `d₀ = −r₀`, `δ₀ = r₀·r₀`.
    pub fn new<M: MatVec<Vec<T>>>(a: &M, b: &[T], x0: Vec<T>) -> Self {
        let mut r = vec![T::zero(); b.len()];
        a.matvec(&x0, &mut r);
        for (ri, &bi) in r.iter_mut().zip(b) {
            *ri = *ri - bi;
        }
        let d = r.iter().map(|&ri| -ri).collect();
        let delta = ().dot(&r, &r);
        Self { x: x0, r, d, delta }
    }

    /// `x += λ·d`, `r += λ·(A·d)`; returns the new `r·r` without touching `delta`.
    fn advance(&mut self, lambda: T, ad: &[T]) -> T {
        for (xi, &di) in self.x.iter_mut().zip(&self.d) {
            *xi = *xi + lambda * di;
        }
        for (ri, &adi) in self.r.iter_mut().zip(ad) {
            *ri = *ri + lambda * adi;
        }
        ().dot(&self.r, &self.r)
    }

    /// Fletcher–Reeves direction update, then `delta ← delta_new`.
    fn redirect(&mut self, delta_new: T) {
        let beta = delta_new / self.delta;
        for (di, &ri) in self.d.iter_mut().zip(&self.r) {
            *di = -ri + beta * *di;
        }
        self.delta = delta_new;
    }

    pub fn residual_norm(&self) -> T {
        self.delta.sqrt()
    }
}

/// Result of a CG run that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub enum IterativeOutcome<T> {
    Converged {
        x: Vec<T>,
        iterations: usize,
        residual: T,
    },
    /// Soft failure: `x` is the last estimate, usable but short of `tol`.
    MaxIterationsExceeded {
        x: Vec<T>,
        iterations: usize,
        residual: T,
    },
}

impl<T: Copy> IterativeOutcome<T> {
    pub fn x(&self) -> &[T] {
        match self {
            Self::Converged { x, .. } | Self::MaxIterationsExceeded { x, .. } => x,
        }
    }

    pub fn into_x(self) -> Vec<T> {
        match self {
            Self::Converged { x, .. } | Self::MaxIterationsExceeded { x, .. } => x,
        }
    }

    pub fn iterations(&self) -> usize {
        match self {
            Self::Converged { iterations, .. } | Self::MaxIterationsExceeded { iterations, .. } => {
                *iterations
            }
        }
    }

    pub fn residual(&self) -> T {
        match self {
            Self::Converged { residual, .. } | Self::MaxIterationsExceeded { residual, .. } => {
                *residual
            }
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

pub struct CgSolver<T> {
    pub conv: Convergence<T>,
    pub opts: CgOptions<T>,
    pub record_history: bool,
    /// `‖r_m‖₂` per iteration, only filled when `record_history` is set.
    pub residual_history: Vec<T>,
}

impl<T: Copy + Float> CgSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self {
            conv: Convergence { tol, max_iters },
            opts: CgOptions::default(),
            record_history: false,
            residual_history: Vec::new(),
        }
    }
    pub fn with_options(mut self, opts: CgOptions<T>) -> Self {
        self.opts = opts;
        self
    }
    pub fn with_symmetry_tol(mut self, tol: T) -> Self {
        self.opts.symmetry_tol = tol;
        self
    }
    pub fn with_breakdown_detection(mut self, flag: bool) -> Self {
        self.opts.detect_breakdown = flag;
        self
    }
    pub fn with_history(mut self, flag: bool) -> Self {
        self.record_history = flag;
        self
    }
    pub fn clear_history(&mut self) {
        self.residual_history.clear();
    }

    fn validate_spd<M>(&self, a: &M) -> Result<(), SolveError>
    where
        M: MatrixGet<T> + MatShape,
    {
        if !is_symmetric(a, self.opts.symmetry_tol) {
            warn!("cg: matrix is not symmetric, refusing to iterate");
            return Err(SolveError::NotSymmetricPositiveDefinite);
        }
        if let Some(k) = first_nonpositive_minor(a) {
            warn!("cg: leading principal minor of order {} is not positive", k);
            return Err(SolveError::NotSymmetricPositiveDefinite);
        }
        debug!("cg: matrix is symmetric positive definite");
        Ok(())
    }

    /// Solve `A x = b` from the initial guess `x0`.
    ///
    /// # Errors
    /// * `InvalidInput` for shape/length problems, non-positive `tol` or zero `max_iters`.
    /// * `NotSymmetricPositiveDefinite` if validation fails; nothing is iterated.
    /// * `NumericalInstability` only when breakdown detection is enabled.
    pub fn solve_outcome<M, B, X>(
        &mut self,
        a: &M,
        b: &B,
        x0: &X,
    ) -> Result<IterativeOutcome<T>, SolveError>
    where
        M: MatrixGet<T> + MatShape + MatVec<Vec<T>>,
        B: VectorLike<T> + ?Sized,
        X: VectorLike<T> + ?Sized,
    {
        let n = require_square(a)?;
        let b = column_of_len(b, n, "right-hand side")?;
        let x0 = column_of_len(x0, n, "initial guess")?;
        self.conv.validate()?;
        self.validate_spd(a)?;

        let ip = ();
        let mut state = ResidualState::new(a, &b, x0);
        if self.record_history {
            self.residual_history.push(state.residual_norm());
        }
        // Exact initial guess: nothing to do, and δ₀ = 0 would poison the direction update.
        if state.delta == T::zero() {
            debug!("cg: initial guess is exact");
            return Ok(IterativeOutcome::Converged {
                x: state.x,
                iterations: 0,
                residual: T::zero(),
            });
        }

        let mut ad = vec![T::zero(); n];
        for m in 1..=self.conv.max_iters {
            a.matvec(&state.d, &mut ad);
            let dad = ip.dot(&state.d, &ad);
            if self.opts.detect_breakdown && (dad == T::zero() || !dad.is_finite()) {
                return Err(SolveError::NumericalInstability(format!(
                    "search direction has zero or non-finite A-norm at iteration {}",
                    m
                )));
            }
            let lambda = state.delta / dad;
            let delta_new = state.advance(lambda, &ad);
            let res_norm = delta_new.sqrt();
            if self.record_history {
                self.residual_history.push(res_norm);
            }
            trace!("cg: iteration {} residual {:e}", m, res_norm.to_f64().unwrap_or(f64::NAN));

            let (stop, stats) = self.conv.check(res_norm, m);
            if stats.converged {
                debug!("cg: converged after {} iterations", m);
                return Ok(IterativeOutcome::Converged {
                    x: state.x,
                    iterations: m,
                    residual: res_norm,
                });
            }
            state.redirect(delta_new);
            if stop {
                break;
            }
        }

        warn!(
            "cg: no convergence within {} iterations (residual {:e})",
            self.conv.max_iters,
            state.residual_norm().to_f64().unwrap_or(f64::NAN)
        );
        Ok(IterativeOutcome::MaxIterationsExceeded {
            residual: state.residual_norm(),
            x: state.x,
            iterations: self.conv.max_iters,
        })
    }
}

impl<M, T> LinearSolver<M, Vec<T>> for CgSolver<T>
where
    M: MatrixGet<T> + MatShape + MatVec<Vec<T>>,
    T: Float,
{
    type Error = SolveError;
    type Scalar = T;

    /// `x` is the initial guess on input and the (possibly unconverged) estimate on output.
    fn solve(&mut self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, SolveError> {
        let outcome = self.solve_outcome(a, b, &*x)?;
        let stats = SolveStats {
            iterations: outcome.iterations(),
            final_residual: outcome.residual(),
            converged: outcome.is_converged(),
        };
        *x = outcome.into_x();
        Ok(stats)
    }
}

/// Solve `A x = b` for symmetric positive-definite `A` by conjugate gradient.
pub fn solve_iterative<M, T, B, X>(
    a: &M,
    b: &B,
    tol: T,
    maxiter: usize,
    x0: &X,
) -> Result<IterativeOutcome<T>, SolveError>
where
    M: MatrixGet<T> + MatShape + MatVec<Vec<T>>,
    T: Float,
    B: VectorLike<T> + ?Sized,
    X: VectorLike<T> + ?Sized,
{
    CgSolver::new(tol, maxiter).solve_outcome(a, b, x0)
}
