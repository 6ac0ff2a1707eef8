pub mod matrix_error;

pub use matrix_error::MatrixError;

/// Result alias used across the workspace.
pub type MatrixResult<T> = Result<T, MatrixError>;
