pub use crate::{
    error::{MathError, MatrixError},
    gauss_jordan::{invert, DEFAULT_PIVOT_EPSILON},
    matrix::Matrix,
    vandermonde::vandermonde,
};
