// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// The four corners of a quad in the fixed order
/// `[top-left, bottom-left, top-right, bottom-right]`.
///
/// Every formula in this workspace indexes corners by that order, so it is
/// never permuted. The quad need not stay rectangular: warping moves corners
/// independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertices(pub [Point; 4]);

impl Vertices {
    /// Index of the top-left corner.
    pub const TOP_LEFT: usize = 0;
    /// Index of the bottom-left corner.
    pub const BOTTOM_LEFT: usize = 1;
    /// Index of the top-right corner.
    pub const TOP_RIGHT: usize = 2;
    /// Index of the bottom-right corner.
    pub const BOTTOM_RIGHT: usize = 3;

    /// Creates vertices from the four corners.
    #[must_use]
    pub const fn new(
        top_left: Point,
        bottom_left: Point,
        top_right: Point,
        bottom_right: Point,
    ) -> Self {
        Self([top_left, bottom_left, top_right, bottom_right])
    }

    /// Corners of an axis-aligned rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x0, rect.y1),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
        )
    }

    /// Corners of a rectangle of `size` with its top-left corner at the origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::from_rect(size.to_rect())
    }

    /// The top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Point {
        self.0[Self::TOP_LEFT]
    }

    /// The bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        self.0[Self::BOTTOM_LEFT]
    }

    /// The top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Point {
        self.0[Self::TOP_RIGHT]
    }

    /// The bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.0[Self::BOTTOM_RIGHT]
    }

    /// Returns these vertices moved by `offset`.
    #[must_use]
    pub fn translated(self, offset: Vec2) -> Self {
        Self(self.0.map(|p| p + offset))
    }

    /// Returns `true` if any three corners lie exactly on one line.
    ///
    /// Coincident corners count as collinear.
    #[must_use]
    pub fn has_collinear_corners(&self) -> bool {
        const TRIPLES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
        TRIPLES.iter().any(|&[a, b, c]| {
            let ab = self.0[b] - self.0[a];
            let ac = self.0[c] - self.0[a];
            ab.cross(ac) == 0.0
        })
    }
}

impl From<Rect> for Vertices {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
