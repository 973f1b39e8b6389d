//! gausscg: dense linear solvers over Faer
//!
//! This crate provides two independent solvers for square systems `A x = b`:
//! naive Gaussian elimination with back substitution, and the conjugate gradient method for
//! symmetric positive-definite matrices with up-front SPD validation.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
