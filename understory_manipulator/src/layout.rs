// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of anchors and the rotation handle in the element's local frame.
//!
//! Coordinates are relative to the untransformed element, top-left at the
//! origin. Anchor positions are rounded to whole pixels.

use kurbo::{Point, Rect, Size};

use crate::geometry::round_half_up;
use crate::{Side, Visibility};

/// Something on the element that can be pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The element itself.
    Body,
    /// One of the anchors.
    Anchor(Side),
    /// The rotation handle above the top edge.
    RotationHandle,
}

/// Anchor and rotation handle rectangles for an element of a given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorLayout {
    size: Size,
    anchor_size: f64,
}

impl AnchorLayout {
    /// Default anchor edge length.
    pub const DEFAULT_ANCHOR_SIZE: f64 = 10.0;
    /// Gap between the top edge and the rotation handle's center.
    pub const ROTATION_HANDLE_OFFSET: f64 = 25.0;

    /// Layout for an element of `size` with default anchors.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            anchor_size: Self::DEFAULT_ANCHOR_SIZE,
        }
    }

    /// Sets the anchor edge length.
    #[must_use]
    pub fn with_anchor_size(mut self, anchor_size: f64) -> Self {
        self.anchor_size = anchor_size;
        self
    }

    /// The element size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Rectangle of the anchor at `side`, centered on its grid point.
    #[must_use]
    pub fn anchor_rect(&self, side: Side) -> Rect {
        let half = self.anchor_size / 2.0;
        let left = round_half_up(-half + self.size.width / 2.0 * side.col() as f64);
        let top = round_half_up(-half + self.size.height / 2.0 * side.row() as f64);
        self.square_at(left, top)
    }

    /// Rectangle of the rotation handle, centered above the top edge.
    #[must_use]
    pub fn rotation_handle_rect(&self) -> Rect {
        let half = self.anchor_size / 2.0;
        let left = round_half_up(-half + self.size.width / 2.0);
        let top = round_half_up(-half - Self::ROTATION_HANDLE_OFFSET);
        self.square_at(left, top)
    }

    /// Rectangle of the element body.
    #[must_use]
    pub fn body_rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// The topmost handle under `point`.
    ///
    /// The rotation handle wins over anchors, which win over the body. Hidden
    /// affordances and the center anchor are never hit.
    #[must_use]
    pub fn hit_test(&self, point: Point, visibility: Visibility) -> Option<Handle> {
        if visibility.rotation_handle && self.rotation_handle_rect().contains(point) {
            return Some(Handle::RotationHandle);
        }
        if visibility.anchors {
            let anchor = Side::ALL
                .into_iter()
                .filter(|s| *s != Side::Center)
                .find(|s| self.anchor_rect(*s).contains(point));
            if let Some(side) = anchor {
                return Some(Handle::Anchor(side));
            }
        }
        self.body_rect().contains(point).then_some(Handle::Body)
    }

    fn square_at(&self, left: f64, top: f64) -> Rect {
        Rect::new(left, top, left + self.anchor_size, top + self.anchor_size)
    }
}
