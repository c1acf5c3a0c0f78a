use std::ops::{Deref, Index};

use crate::{
    error::{MatrixError, Result},
    gauss_jordan,
};

use num_traits::Float;

/// A dense, rectangular matrix of real numbers stored row by row.
///
/// Construction is shape-checked, and operations return shape errors instead
/// of panicking.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    rows: Vec<Vec<T>>,
}

const MATRIX_VECTOR_OP: &str = "matrix-vector multiplication";

impl<T: Float> Matrix<T> {
    /// Construct a matrix from rows, validating that they share a length.
    pub fn try_new(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::ensure_rectangular_rows(&rows)?;
        Ok(Self { rows })
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 if empty).
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// The `size x size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let rows = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { T::one() } else { T::zero() })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Fallible matrix–vector multiplication with shape checks.
    pub fn try_mul_vector(&self, v: &[T]) -> Result<Vec<T>> {
        self.validate_vector_multiplication(v.len())?;
        Ok(self.mul_vector_inner(v))
    }

    /// Invert a square matrix with Gauss–Jordan elimination.
    ///
    /// Pivots are taken strictly in index order. A pivot whose magnitude is
    /// below `pivot_epsilon` fails with [`MatrixError::Singular`].
    pub fn try_inverse(&self, pivot_epsilon: T) -> Result<Self> {
        gauss_jordan::invert(self, pivot_epsilon)
    }

    fn validate_vector_multiplication(
        &self,
        vector_len: usize,
    ) -> core::result::Result<(), MatrixError> {
        if self.rows.is_empty() {
            return Err(MatrixError::Empty {
                operation: MATRIX_VECTOR_OP,
            });
        }

        let matrix_cols = self.ensure_rectangular()?;
        if matrix_cols != vector_len {
            return Err(MatrixError::VectorShapeMismatch {
                operation: MATRIX_VECTOR_OP,
                matrix_rows: self.rows(),
                matrix_cols,
                vector_len,
            });
        }

        Ok(())
    }

    fn mul_vector_inner(&self, v: &[T]) -> Vec<T> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(v)
                    .fold(T::zero(), |acc, (&a_ij, &v_j)| acc + a_ij * v_j)
            })
            .collect()
    }

    pub(crate) fn ensure_square(
        &self,
        operation: &'static str,
    ) -> core::result::Result<usize, MatrixError> {
        if self.rows.is_empty() {
            return Err(MatrixError::Empty { operation });
        }
        let cols = self.ensure_rectangular()?;
        if cols != self.rows() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols,
            });
        }
        Ok(cols)
    }

    fn ensure_rectangular(&self) -> core::result::Result<usize, MatrixError> {
        Self::ensure_rectangular_rows(&self.rows)
    }

    fn ensure_rectangular_rows(
        rows: &[Vec<T>],
    ) -> core::result::Result<usize, MatrixError> {
        if let Some((first, rest)) = rows.split_first() {
            let expected = first.len();
            for (offset, row) in rest.iter().enumerate() {
                if row.len() != expected {
                    return Err(MatrixError::Ragged {
                        row: offset + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
            Ok(expected)
        } else {
            Ok(0)
        }
    }
}

/// Immutable indexing by row.
impl<T> Index<usize> for Matrix<T> {
    type Output = Vec<T>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T> Deref for Matrix<T> {
    type Target = [Vec<T>];
    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error as MathError, MatrixError};

    type Mat = Matrix<f64>;

    fn mat(rows: Vec<Vec<f64>>) -> Mat {
        Mat::try_new(rows).unwrap()
    }

    // --------------------------
    // shape / construction
    // --------------------------

    #[test]
    fn identity_has_ones_on_the_diagonal() {
        let id = Mat::identity(3);
        assert_eq!(
            id.as_slice(),
            &[
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0]
            ]
        );
        assert_eq!(id.shape(), (3, 3));
    }

    #[test]
    fn try_new_preserves_shape_validation() {
        let ok = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(ok.shape(), (2, 3));
        assert_eq!(ok[1], vec![4.0, 5.0, 6.0]);

        let err = Mat::try_new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MathError::Matrix(MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn try_new_allows_empty_matrix() {
        let empty = mat(Vec::new());
        assert_eq!(empty.shape(), (0, 0));
        assert!(empty.as_slice().is_empty());
    }

    // --------------------------
    // matrix–vector multiplication
    // --------------------------

    #[test]
    fn mul_vector_with_constants() {
        // 2x3 * 3 -> 2
        let m = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let out = m.try_mul_vector(&[7.0, 8.0, 9.0]).unwrap();
        // Row 0: 1*7 + 2*8 + 3*9 = 50, Row 1: 4*7 + 5*8 + 6*9 = 122
        assert_eq!(out, vec![50.0, 122.0]);
    }

    #[test]
    fn try_mul_vector_errors_on_empty_or_mismatch() {
        let err = mat(vec![]).try_mul_vector(&[]).unwrap_err();
        assert_eq!(
            err,
            MathError::Matrix(MatrixError::Empty {
                operation: super::MATRIX_VECTOR_OP
            })
        );

        let m = mat(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let err = m.try_mul_vector(&[7.0, 8.0]).unwrap_err();
        assert_eq!(
            err,
            MathError::Matrix(MatrixError::VectorShapeMismatch {
                operation: super::MATRIX_VECTOR_OP,
                matrix_rows: 2,
                matrix_cols: 3,
                vector_len: 2
            })
        );
        assert_eq!(
            err.to_string(),
            "matrix/vector shape mismatch during matrix-vector \
             multiplication: matrix is 2x3 but vector has length 2"
        );
    }

    #[test]
    fn ensure_square_rejects_rectangular_and_empty() {
        let m = mat(vec![vec![0.0; 3]; 2]);
        assert_eq!(
            m.ensure_square("test"),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            mat(vec![]).ensure_square("test"),
            Err(MatrixError::Empty { operation: "test" })
        );
        assert_eq!(Mat::identity(3).ensure_square("test"), Ok(3));
    }
}
