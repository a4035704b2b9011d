// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quad-to-quad projective matrices.
//!
//! A projective transform mapping four source corners onto four target
//! corners has eight unknowns `h0..h7`. Each correspondence `(x, y) → (u, v)`
//! contributes two rows to an 8×8 linear system:
//!
//! ```text
//! [x, y, 1, 0, 0, 0, -u·x, -u·y] · h = u
//! [0, 0, 0, x, y, 1, -v·x, -v·y] · h = v
//! ```
//!
//! The solution is embedded into a homogeneous 4×4 matrix whose z row and
//! column are the identity, so the 2D warp can be applied by renderers that
//! expect 3D matrices (such as CSS `matrix3d`).

use kurbo::Point;

use core::fmt;

use crate::{Matrix, SolveError, Vertices, solve};

/// Error returned when no projective matrix maps one quad onto another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarpError {
    /// The 8×8 linear system has no unique solution.
    Solve(SolveError),
    /// Three or more corners of the source or target quad are collinear.
    Degenerate,
}

impl fmt::Display for WarpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solve(err) => write!(f, "no projective solution: {err}"),
            Self::Degenerate => f.write_str("quad has three or more collinear corners"),
        }
    }
}

impl core::error::Error for WarpError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Solve(err) => Some(err),
            Self::Degenerate => None,
        }
    }
}

impl From<SolveError> for WarpError {
    fn from(err: SolveError) -> Self {
        Self::Solve(err)
    }
}

/// A homogeneous 4×4 projective matrix stored column-major.
///
/// `columns()[c][r]` is the element at row `r`, column `c`. Flattening the
/// columns in order yields the sequence expected by `matrix3d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectiveMatrix {
    columns: [[f64; 4]; 4],
}

impl ProjectiveMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        columns: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from its columns.
    #[must_use]
    pub const fn from_columns(columns: [[f64; 4]; 4]) -> Self {
        Self { columns }
    }

    /// Builds the projective matrix that maps `source` onto `target`.
    ///
    /// Fails with [`WarpError::Degenerate`] when either quad has three
    /// collinear corners and with [`WarpError::Solve`] when the linear system
    /// is singular. Callers are expected to keep their previous matrix on
    /// failure.
    ///
    /// ```
    /// use kurbo::Size;
    /// use understory_homography::{ProjectiveMatrix, Vertices};
    ///
    /// let quad = Vertices::from_size(Size::new(10.0, 10.0));
    /// let m = ProjectiveMatrix::from_quads(&quad, &quad).unwrap();
    /// assert!(m.approx_eq(&ProjectiveMatrix::IDENTITY, 1e-9));
    /// ```
    pub fn from_quads(source: &Vertices, target: &Vertices) -> Result<Self, WarpError> {
        if source.has_collinear_corners() || target.has_collinear_corners() {
            return Err(WarpError::Degenerate);
        }

        let mut a = Matrix::zeros(8, 8);
        let mut b = Matrix::zeros(8, 1);
        for (i, (from, to)) in source.0.iter().zip(target.0.iter()).enumerate() {
            let (x, y, u, v) = (from.x, from.y, to.x, to.y);
            let r = 2 * i;
            for (c, value) in [x, y, 1.0, 0.0, 0.0, 0.0, -u * x, -u * y]
                .into_iter()
                .enumerate()
            {
                a[(r, c)] = value;
            }
            for (c, value) in [0.0, 0.0, 0.0, x, y, 1.0, -v * x, -v * y]
                .into_iter()
                .enumerate()
            {
                a[(r + 1, c)] = value;
            }
            b[(r, 0)] = u;
            b[(r + 1, 0)] = v;
        }

        let h = solve(&a, &b)?;
        let h = |i: usize| h[(i, 0)];
        let rows = [
            [h(0), h(1), 0.0, h(2)],
            [h(3), h(4), 0.0, h(5)],
            [0.0, 0.0, 1.0, 0.0],
            [h(6), h(7), 0.0, 1.0],
        ];
        let mut columns = [[0.0; 4]; 4];
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                columns[c][r] = *value;
            }
        }
        Ok(Self { columns })
    }

    /// The matrix columns.
    #[must_use]
    pub fn columns(&self) -> &[[f64; 4]; 4] {
        &self.columns
    }

    /// The element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.columns[col][row]
    }

    /// All sixteen elements in column-major order.
    #[must_use]
    pub fn to_column_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (c, column) in self.columns.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(column);
        }
        out
    }

    /// Applies the transform to a point in the `z = 0` plane.
    ///
    /// Returns `None` for points that map to infinity.
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Option<Point> {
        let x = self.get(0, 0) * p.x + self.get(0, 1) * p.y + self.get(0, 3);
        let y = self.get(1, 0) * p.x + self.get(1, 1) * p.y + self.get(1, 3);
        let w = self.get(3, 0) * p.x + self.get(3, 1) * p.y + self.get(3, 3);
        (w != 0.0).then(|| Point::new(x / w, y / w))
    }

    /// Returns `true` if every element differs from `other` by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.to_column_major()
            .iter()
            .zip(other.to_column_major().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for ProjectiveMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
