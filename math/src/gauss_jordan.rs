//! Gauss–Jordan inversion without row exchanges.

use num_traits::Float;
use tracing::trace;

use crate::{
    error::{MatrixError, Result},
    matrix::Matrix,
};

/// Absolute pivot magnitude below which a matrix is reported as singular.
pub const DEFAULT_PIVOT_EPSILON: f64 = 1e-10;

const INVERSION_OP: &str = "matrix inversion";

/// Invert `matrix` by reducing the augmented matrix `[M | I]` to `[I | M^-1]`.
///
/// Pivot `i` is always `augmented[i][i]`; rows are never exchanged, so a
/// vanishing leading minor is reported as singular even when the matrix
/// itself is invertible.
pub fn invert<T: Float>(
    matrix: &Matrix<T>,
    pivot_epsilon: T,
) -> Result<Matrix<T>> {
    let size = matrix.ensure_square(INVERSION_OP)?;
    let mut augmented = augment_with_identity(matrix, size);

    for i in 0..size {
        let pivot = augmented[i][i];
        if !pivot.is_finite() || pivot.abs() < pivot_epsilon {
            return Err(MatrixError::Singular {
                row: i,
                pivot: pivot.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }
        trace!(row = i, pivot = pivot.to_f64(), "eliminating column");

        for value in augmented[i].iter_mut() {
            *value = *value / pivot;
        }

        let (before, rest) = augmented.split_at_mut(i);
        let (pivot_row, after) = rest.split_at_mut(1);
        let pivot_row = &pivot_row[0];
        for row in before.iter_mut().chain(after.iter_mut()) {
            let multiplier = row[i];
            for (value, &p) in row.iter_mut().zip(pivot_row.iter()) {
                *value = *value - multiplier * p;
            }
        }
    }

    let rows = augmented
        .into_iter()
        .map(|mut row| row.split_off(size))
        .collect();
    Matrix::try_new(rows)
}

fn augment_with_identity<T: Float>(
    matrix: &Matrix<T>,
    size: usize,
) -> Vec<Vec<T>> {
    let identity = Matrix::<T>::identity(size);
    matrix
        .iter()
        .zip(identity.iter())
        .map(|(row, unit)| {
            let mut augmented = Vec::with_capacity(2 * size);
            augmented.extend_from_slice(row);
            augmented.extend_from_slice(unit);
            augmented
        })
        .collect()
}
