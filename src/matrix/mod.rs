//! Matrix module: dense construction, vector normalisation and SPD checks.

pub mod dense;
pub use dense::{DenseMatrix, augment, require_square};
pub mod spd;
pub mod vector;
pub use vector::VectorLike;
