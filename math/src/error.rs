use thiserror::Error;

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("matrix cannot be empty during {operation}")]
        Empty { operation: &'static str },
        #[error(
            "matrix is ragged: row {row} has {found} columns but expected \
             {expected}"
        )]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error("matrix must be square, got {rows}x{cols}")]
        NotSquare { rows: usize, cols: usize },
        #[error(
            "matrix/vector shape mismatch during {operation}: \
             matrix is {matrix_rows}x{matrix_cols} but vector has length \
             {vector_len}"
        )]
        VectorShapeMismatch {
            operation: &'static str,
            matrix_rows: usize,
            matrix_cols: usize,
            vector_len: usize,
        },
        #[error(
            "matrix is singular: pivot {pivot:e} at row {row} is below the \
             threshold"
        )]
        Singular { row: usize, pivot: f64 },
    }
}

pub use matrix::Error as MatrixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type Error = MathError;
