//! Core traits and their faer implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatShape, MatVec, MatrixGet};
pub use wrappers::residual_norm;
