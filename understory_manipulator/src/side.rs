// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor positions on the element's 3×3 grid.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

/// One of the nine anchor positions of an element.
///
/// Sides form a 3×3 grid of rows {top, center, bottom} and columns
/// {left, center, right}. [`Side::Center`] is the hidden middle anchor; it
/// never drives a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    CenterLeft,
    /// The element center.
    Center,
    /// Middle of the right edge.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl Side {
    /// All sides in row-major grid order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// The four corners in vertex order
    /// `[top-left, bottom-left, top-right, bottom-right]`.
    pub const CORNERS: [Self; 4] = [
        Self::TopLeft,
        Self::BottomLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// The side at grid `(row, col)`, both in `0..3`.
    #[must_use]
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self::ALL[row * 3 + col])
        } else {
            None
        }
    }

    /// Row-major index into [`Side::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid row: 0 for top, 1 for center, 2 for bottom.
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Grid column: 0 for left, 1 for center, 2 for right.
    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    /// Returns `true` for the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.row() != 1 && self.col() != 1
    }

    /// Returns `true` for the four edge midpoints.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        !self.is_corner() && !matches!(self, Self::Center)
    }

    /// Index of this side in [`Vertices`](understory_homography::Vertices), for corners.
    #[must_use]
    pub const fn vertex_index(self) -> Option<usize> {
        match self {
            Self::TopLeft => Some(0),
            Self::BottomLeft => Some(1),
            Self::TopRight => Some(2),
            Self::BottomRight => Some(3),
            _ => None,
        }
    }

    /// The kebab-case name, e.g. `"top-left"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::CenterLeft => "center-left",
            Self::Center => "center",
            Self::CenterRight => "center-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// The CSS cursor an anchor at this side shows.
    #[must_use]
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::TopLeft | Self::BottomRight => "nwse-resize",
            Self::TopRight | Self::BottomLeft => "nesw-resize",
            Self::TopCenter | Self::BottomCenter => "ns-resize",
            Self::CenterLeft | Self::CenterRight => "ew-resize",
            Self::Center => "auto",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown side name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseSideError;

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown side name")
    }
}

impl core::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|side| side.as_str() == s)
            .ok_or(ParseSideError)
    }
}

/// Dense storage of one value per [`Side`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideMap<T>([T; 9]);

impl<T> SideMap<T> {
    /// Builds a map by calling `f` for every side.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self(core::array::from_fn(|i| f(Side::ALL[i])))
    }

    /// Iterates over `(side, value)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> + '_ {
        Side::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterates mutably over `(side, value)` pairs in grid order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> + '_ {
        Side::ALL.into_iter().zip(self.0.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}

bitflags::bitflags! {
    /// A set of sides, e.g. the anchors taking part in a warp.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SideSet: u16 {
        /// [`Side::TopLeft`].
        const TOP_LEFT      = 1 << 0;
        /// [`Side::TopCenter`].
        const TOP_CENTER    = 1 << 1;
        /// [`Side::TopRight`].
        const TOP_RIGHT     = 1 << 2;
        /// [`Side::CenterLeft`].
        const CENTER_LEFT   = 1 << 3;
        /// [`Side::Center`].
        const CENTER        = 1 << 4;
        /// [`Side::CenterRight`].
        const CENTER_RIGHT  = 1 << 5;
        /// [`Side::BottomLeft`].
        const BOTTOM_LEFT   = 1 << 6;
        /// [`Side::BottomCenter`].
        const BOTTOM_CENTER = 1 << 7;
        /// [`Side::BottomRight`].
        const BOTTOM_RIGHT  = 1 << 8;
    }
}

impl SideSet {
    /// Returns `true` if `side` is in the set.
    #[must_use]
    pub fn has(self, side: Side) -> bool {
        self.contains(side.into())
    }

    /// Iterates over the sides in the set in grid order.
    pub fn sides(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |s| self.has(*s))
    }
}

impl From<Side> for SideSet {
    fn from(side: Side) -> Self {
        Self::from_bits_retain(1 << side.index())
    }
}
