// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_homography --heading-base-level=0

//! Understory Homography: linear solving and quad-to-quad projective matrices.
//!
//! This crate provides the small amount of linear algebra needed to warp a
//! rectangle by dragging its corners:
//!
//! - [`Matrix`]: a dense, row-major matrix of `f64`.
//! - [`invert`] and [`solve`]: Gauss-Jordan elimination that reports singular
//!   systems as [`SolveError`] instead of producing a partial result.
//! - [`Vertices`]: the four corners of a quad in a fixed order.
//! - [`ProjectiveMatrix`]: the homogeneous 4×4 matrix mapping one quad onto
//!   another, stored column-major.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_homography::{ProjectiveMatrix, Vertices};
//!
//! let source = Vertices::from_size(Size::new(100.0, 50.0));
//! // Drag the bottom-right corner outwards.
//! let mut target = source;
//! target.0[Vertices::BOTTOM_RIGHT] = Point::new(120.0, 70.0);
//!
//! let warp = ProjectiveMatrix::from_quads(&source, &target).unwrap();
//! let p = warp.transform_point(Point::new(100.0, 50.0)).unwrap();
//! assert!((p.x - 120.0).abs() < 1e-9 && (p.y - 70.0).abs() < 1e-9);
//! ```
//!
//! ## Degenerate input
//!
//! Pivots are compared against exactly zero. When three corners of a quad
//! are collinear the homography would be rank deficient, so
//! [`ProjectiveMatrix::from_quads`] rejects such quads with
//! [`WarpError::Degenerate`] before solving.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod matrix;
pub mod projective;
pub mod solve;
mod vertices;

pub use matrix::Matrix;
pub use projective::{ProjectiveMatrix, WarpError};
pub use solve::{SolveError, invert, solve};
pub use vertices::Vertices;
