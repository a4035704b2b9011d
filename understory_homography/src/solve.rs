// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauss-Jordan inversion and linear system solving.
//!
//! Both operations report failure through [`SolveError`] rather than
//! panicking or returning a partially reduced matrix. Pivots are compared
//! against exactly zero; there is no tolerance for near-singular systems.

use core::fmt;

use crate::Matrix;

/// Error returned when a matrix cannot be inverted or a system cannot be solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Only square matrices can be inverted.
    NotSquare {
        /// Number of rows of the rejected matrix.
        rows: usize,
        /// Number of columns of the rejected matrix.
        cols: usize,
    },
    /// The right-hand side does not have as many rows as the coefficient matrix.
    DimensionMismatch {
        /// Rows required by the coefficient matrix.
        expected: usize,
        /// Rows found on the right-hand side.
        found: usize,
    },
    /// No nonzero pivot exists for `column`: the matrix is singular.
    Singular {
        /// The column where elimination ran out of pivots.
        column: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "cannot invert a non-square {rows}x{cols} matrix")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "right-hand side has {found} rows but the system has {expected}"
            ),
            Self::Singular { column } => {
                write!(f, "matrix is singular (no pivot in column {column})")
            }
        }
    }
}

impl core::error::Error for SolveError {}

/// Inverts a square matrix with Gauss-Jordan elimination.
///
/// The coefficient matrix and an identity matrix are reduced together. When a
/// pivot is zero, the first later row with a nonzero entry in that column is
/// swapped in; when there is none the matrix is singular.
///
/// ```
/// use understory_homography::{Matrix, invert};
///
/// let m = Matrix::from_rows(&[[2.0, 0.0], [0.0, 4.0]]);
/// let inv = invert(&m).unwrap();
/// assert_eq!(inv, Matrix::from_rows(&[[0.5, 0.0], [0.0, 0.25]]));
/// ```
pub fn invert(matrix: &Matrix) -> Result<Matrix, SolveError> {
    if !matrix.is_square() {
        return Err(SolveError::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }

    let n = matrix.rows();
    let mut a = matrix.clone();
    let mut inverse = Matrix::identity(n);

    for i in 0..n {
        if a[(i, i)] == 0.0
            && let Some(swap) = (i + 1..n).find(|&k| a[(k, i)] != 0.0)
        {
            a.swap_rows(i, swap);
            inverse.swap_rows(i, swap);
        }

        let pivot = a[(i, i)];
        if pivot == 0.0 {
            return Err(SolveError::Singular { column: i });
        }
        a.divide_row(i, pivot);
        inverse.divide_row(i, pivot);

        for row in 0..n {
            let value = a[(row, i)];
            if row == i || value == 0.0 {
                continue;
            }
            a.add_scaled_row(i, row, -value);
            inverse.add_scaled_row(i, row, -value);
        }
    }

    Ok(inverse)
}

/// Solves `a · h = b` for `h` by computing `a⁻¹ · b`.
///
/// `b` may have any number of columns; each column is solved independently.
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix, SolveError> {
    if b.rows() != a.rows() {
        return Err(SolveError::DimensionMismatch {
            expected: a.rows(),
            found: b.rows(),
        });
    }
    let inverse = invert(a)?;
    inverse
        .checked_mul(b)
        .ok_or(SolveError::DimensionMismatch {
            expected: inverse.cols(),
            found: b.rows(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Matrix, b: &Matrix) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()), "shape");
        for r in 0..a.rows() {
            for c in 0..a.cols() {
                let d = a[(r, c)] - b[(r, c)];
                assert!(d * d < 1e-18, "({r}, {c}): {} vs {}", a[(r, c)], b[(r, c)]);
            }
        }
    }

    #[test]
    fn inverts_general_matrix() {
        let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]);
        let inv = invert(&m).unwrap();
        assert_close(&inv, &Matrix::from_rows(&[[0.6, -0.7], [-0.2, 0.4]]));
        assert_close(&m.checked_mul(&inv).unwrap(), &Matrix::identity(2));
    }

    #[test]
    fn swaps_rows_on_zero_pivot() {
        let m = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]);
        let inv = invert(&m).unwrap();
        assert_close(&inv, &m);
    }

    #[test]
    fn zero_pivot_swaps_with_first_nonzero_row_below() {
        let m = Matrix::from_rows(&[[0.0, 0.0, 1.0], [0.0, 2.0, 0.0], [3.0, 0.0, 0.0]]);
        let inv = invert(&m).unwrap();
        assert_close(&m.checked_mul(&inv).unwrap(), &Matrix::identity(3));
        assert_close(
            &inv,
            &Matrix::from_rows(&[[0.0, 0.0, 1.0 / 3.0], [0.0, 0.5, 0.0], [1.0, 0.0, 0.0]]),
        );
    }

    #[test]
    fn singular_matrix_is_reported() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(invert(&m), Err(SolveError::Singular { column: 1 }));
    }

    #[test]
    fn zero_column_is_singular_at_that_column() {
        let m = Matrix::from_rows(&[[0.0, 1.0], [0.0, 3.0]]);
        assert_eq!(invert(&m), Err(SolveError::Singular { column: 0 }));
    }

    #[test]
    fn non_square_is_rejected() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(
            invert(&m),
            Err(SolveError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn input_is_not_modified() {
        let m = Matrix::from_rows(&[[0.0, 2.0], [3.0, 0.0]]);
        let before = m.clone();
        let _ = invert(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn solves_linear_system() {
        // x + y = 3, x - y = 1
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, -1.0]]);
        let b = Matrix::column(&[3.0, 1.0]);
        let h = solve(&a, &b).unwrap();
        assert_close(&h, &Matrix::column(&[2.0, 1.0]));
    }

    #[test]
    fn solve_propagates_singularity() {
        let a = Matrix::from_rows(&[[1.0, 1.0], [2.0, 2.0]]);
        let b = Matrix::column(&[1.0, 2.0]);
        assert!(matches!(solve(&a, &b), Err(SolveError::Singular { .. })));
    }

    #[test]
    fn solve_rejects_wrong_rhs_height() {
        let a = Matrix::identity(3);
        let b = Matrix::column(&[1.0, 2.0]);
        assert_eq!(
            solve(&a, &b),
            Err(SolveError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }
}
