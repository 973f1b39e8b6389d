//! Context module for gausscg.
//!
//! Provides a small factory that holds a system matrix together with the parameters for both
//! solvers, so callers can switch between elimination and conjugate gradient with a single
//! `SolverKind` value.
//!
//! # Example
//! ```rust
//! use faer::Mat;
//! use gausscg::context::{SolveContext, SolverKind};
//!
//! let a = Mat::from_fn(2, 2, |i, j| if i == j { 2.0 } else { 0.0 });
//! let mut ctx = SolveContext::new(SolverKind::Gauss, a, 1e-10, 10);
//! let mut x = vec![0.0; 2];
//! ctx.solve_context(&vec![2.0, 4.0], &mut x).unwrap();
//! assert_eq!(x, vec![1.0, 2.0]);
//! ```

pub mod solve_context;
pub use solve_context::{SolveContext, SolverKind};
