// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for the manipulation gestures.
//!
//! Every function here is stateless. Accumulation across a gesture happens in
//! [`TransformAccumulator`](crate::TransformAccumulator).

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use understory_homography::Vertices;

use crate::{Side, SideMap};

/// Result of one resize step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeStep {
    /// Change of the element size.
    pub size_delta: Vec2,
    /// New displacement of the element's top-left corner.
    pub offset: Vec2,
}

/// Directional difference `to - from`.
#[must_use]
pub fn subtract(from: Point, to: Point) -> Vec2 {
    to - from
}

/// Width and height spanned by the top-left and bottom-right corners.
#[must_use]
pub fn size(vertices: &Vertices) -> Vec2 {
    vertices.bottom_right() - vertices.top_left()
}

/// Center of the quad, rounded to whole pixels with halves rounding up.
#[must_use]
pub fn center_from_vertices(vertices: &Vertices) -> Point {
    let half = size(vertices) / 2.0;
    let c = vertices.bottom_right() - half;
    Point::new(round_half_up(c.x), round_half_up(c.y))
}

/// Rounds to the nearest integer, sending halves towards positive infinity.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Resizes from `side` by `delta`, given the previous top-left `offset`.
///
/// Dragging a left or top side moves the top-left corner along with the
/// pointer and shrinks the size by the same amount. Right and bottom sides
/// only grow the size.
///
/// ```
/// use kurbo::Vec2;
/// use understory_manipulator::Side;
/// use understory_manipulator::geometry::resize;
///
/// let step = resize(Side::TopLeft, Vec2::ZERO, Vec2::new(5.0, 3.0));
/// assert_eq!(step.size_delta, Vec2::new(-5.0, -3.0));
/// assert_eq!(step.offset, Vec2::new(5.0, 3.0));
/// ```
#[must_use]
pub fn resize(side: Side, offset: Vec2, delta: Vec2) -> ResizeStep {
    let Vec2 { x: dx, y: dy } = delta;
    let (size_delta, moved) = match side {
        Side::TopLeft => (Vec2::new(-dx, -dy), Vec2::new(dx, dy)),
        Side::TopCenter => (Vec2::new(0.0, -dy), Vec2::new(0.0, dy)),
        Side::TopRight => (Vec2::new(dx, -dy), Vec2::new(0.0, dy)),
        Side::CenterLeft => (Vec2::new(-dx, 0.0), Vec2::new(dx, 0.0)),
        Side::Center => (Vec2::ZERO, Vec2::ZERO),
        Side::CenterRight => (Vec2::new(dx, 0.0), Vec2::ZERO),
        Side::BottomLeft => (Vec2::new(-dx, dy), Vec2::new(dx, 0.0)),
        Side::BottomCenter => (Vec2::new(0.0, dy), Vec2::ZERO),
        Side::BottomRight => (Vec2::new(dx, dy), Vec2::ZERO),
    };
    ResizeStep {
        size_delta,
        offset: offset + moved,
    }
}

/// Per-axis scale factor for dragging the anchor at `side` by `delta`.
///
/// The stretch is symmetric about the center: the dragged edge moves by
/// `delta` and the opposite edge by `-delta`, so a dimension changes by twice
/// the drag. A zero dimension, or a stretch that would collapse the element to
/// zero, yields a factor of `1` on that axis.
#[must_use]
pub fn scale(vertices: &Vertices, side: Side, delta: Vec2) -> Vec2 {
    let Vec2 { x: w, y: h } = size(vertices);
    let ratio = |dim: f64, change: f64| {
        let r = (dim + change) / dim;
        if r == 0.0 || !r.is_finite() { 1.0 } else { r }
    };
    let right = ratio(w, 2.0 * delta.x);
    let left = ratio(w, -2.0 * delta.x);
    let bottom = ratio(h, 2.0 * delta.y);
    let top = ratio(h, -2.0 * delta.y);

    let (x, y) = match side {
        Side::TopLeft => (left, top),
        Side::TopCenter => (1.0, top),
        Side::TopRight => (right, top),
        Side::CenterLeft => (left, 1.0),
        Side::Center => (1.0, 1.0),
        Side::CenterRight => (right, 1.0),
        Side::BottomLeft => (left, bottom),
        Side::BottomCenter => (1.0, bottom),
        Side::BottomRight => (right, bottom),
    };
    Vec2::new(x, y)
}

/// Collapses a per-axis factor to a uniform one.
///
/// The axis that deviates most from `1` wins, so dragging an edge anchor
/// still scales both axes.
#[must_use]
pub fn uniform(factor: Vec2) -> Vec2 {
    let k = if (factor.x - 1.0).abs() >= (factor.y - 1.0).abs() {
        factor.x
    } else {
        factor.y
    };
    Vec2::new(k, k)
}

/// Absolute rotation in degrees of `pointer` around `center`, in `[0, 360)`.
///
/// A pointer straight above the center is the rest position `0°`; angles grow
/// clockwise on screen, so a pointer to the right reads `90°`.
#[must_use]
pub fn rotate(center: Point, pointer: Point) -> f64 {
    let d = pointer - center;
    let degrees = (d.y.atan2(d.x) - 3.0 * PI / 2.0).to_degrees() % 360.0;
    let degrees = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };
    // -0.0 and values that round up to a full turn both mean the rest angle.
    if degrees == 0.0 || degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Applies accumulated per-corner displacements to `start`.
///
/// Only the four corner entries are read; the others are ignored.
#[must_use]
pub fn vertices_from_distance(start: &Vertices, distances: &SideMap<Vec2>) -> Vertices {
    let mut out = *start;
    for (point, side) in out.0.iter_mut().zip(Side::CORNERS) {
        *point += distances[side];
    }
    out
}
