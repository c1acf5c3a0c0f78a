use num_traits::Float;

use crate::{
    error::{MatrixError, Result},
    matrix::Matrix,
};

const VANDERMONDE_OP: &str = "vandermonde construction";

/// Build the square Vandermonde matrix for `xs`, highest power first.
///
/// Row `i` is `[x_i^(k-1), x_i^(k-2), ..., x_i, 1]` with `k = xs.len()`, so
/// solving `V c = y` yields coefficients ordered from the degree `k-1` term
/// down to the constant term.
pub fn vandermonde<T: Float>(xs: &[T]) -> Result<Matrix<T>> {
    if xs.is_empty() {
        return Err(MatrixError::Empty {
            operation: VANDERMONDE_OP,
        }
        .into());
    }

    let k = xs.len();
    let rows = xs
        .iter()
        .map(|&x| (0..k).rev().map(|power| x.powi(power as i32)).collect())
        .collect();
    Matrix::try_new(rows)
}
