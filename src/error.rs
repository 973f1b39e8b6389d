use thiserror::Error;

// Unified error type for gausscg

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("matrix is not symmetric positive definite")]
    NotSymmetricPositiveDefinite,
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}
