// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Middleware between raw gesture payloads and the reducers.
//!
//! A [`Pipeline`] is an ordered list of stages. Each stage receives the
//! payload produced by the previous one and may rewrite it (snapping,
//! clamping) or drop it by returning `None`.
//!
//! ```
//! use kurbo::Point;
//! use understory_manipulator::pipeline::{Pipeline, PointerDrag};
//!
//! let mut moving = Pipeline::new();
//! // Horizontal moves only.
//! moving.push(|d: PointerDrag| Some(PointerDrag { to: Point::new(d.to.x, d.from.y), ..d }));
//!
//! let out = moving.run(PointerDrag { from: Point::ZERO, to: Point::new(4.0, 9.0) });
//! assert_eq!(out.map(|d| d.to), Some(Point::new(4.0, 0.0)));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};
use understory_homography::Vertices;

use crate::Side;

/// A body drag step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDrag {
    /// Previous pointer position.
    pub from: Point,
    /// New pointer position.
    pub to: Point,
}

impl PointerDrag {
    /// Displacement `to - from`.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.to - self.from
    }
}

/// An anchor drag step, used by resize and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorDrag {
    /// The dragged anchor.
    pub side: Side,
    /// Previous pointer position.
    pub from: Point,
    /// New pointer position.
    pub to: Point,
}

impl AnchorDrag {
    /// Displacement `to - from`.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.to - self.from
    }
}

/// A rotation handle drag step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationDrag {
    /// Pivot of the rotation.
    pub center: Point,
    /// Previous pointer position.
    pub from: Point,
    /// New pointer position.
    pub to: Point,
}

/// A warp step: the unwarped quad and where its corners should land.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpDrag {
    /// Corners of the unwarped element, top-left at the origin.
    pub source: Vertices,
    /// Source corners plus the accumulated corner drags.
    pub target: Vertices,
}

type Stage<T> = Box<dyn FnMut(T) -> Option<T>>;

/// An ordered list of payload transformations.
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
}

impl<T> Pipeline<T> {
    /// Creates an empty pipeline, which passes payloads through unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage.
    pub fn push(&mut self, stage: impl FnMut(T) -> Option<T> + 'static) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Runs `payload` through every stage in order.
    ///
    /// Returns `None` as soon as a stage drops the payload.
    pub fn run(&mut self, payload: T) -> Option<T> {
        self.stages
            .iter_mut()
            .try_fold(payload, |payload, stage| stage(payload))
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if there are no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Removes every stage.
    pub fn clear(&mut self) {
        self.stages.clear();
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// One pipeline per gesture family.
#[derive(Debug, Default)]
pub struct Pipelines {
    /// Body drags.
    pub moving: Pipeline<PointerDrag>,
    /// Anchor drags while resizing.
    pub resizing: Pipeline<AnchorDrag>,
    /// Anchor drags while scaling.
    pub scaling: Pipeline<AnchorDrag>,
    /// Rotation handle drags.
    pub rotating: Pipeline<RotationDrag>,
    /// Warp quads after corner distances are accumulated.
    pub warping: Pipeline<WarpDrag>,
}
