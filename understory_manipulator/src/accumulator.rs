// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform state accumulation and the style sink it feeds.

use kurbo::{Point, Size, Vec2};
use understory_homography::{ProjectiveMatrix, Vertices, WarpError};

use crate::geometry::{self, ResizeStep};
use crate::{Side, TransformStage, Visibility, VisualTransform};

/// Receives the styling an element should show.
///
/// The manipulator never touches a scene or a DOM itself; it reports sizes,
/// transforms and affordance visibility through this trait.
pub trait StyleSink {
    /// The element size changed.
    fn set_size(&mut self, size: Size);

    /// The composed transform changed.
    fn set_transform(&mut self, transform: &VisualTransform);

    /// The affordance visibility changed.
    fn set_visibility(&mut self, visibility: Visibility) {
        let _ = visibility;
    }
}

impl StyleSink for () {
    fn set_size(&mut self, _: Size) {}

    fn set_transform(&mut self, _: &VisualTransform) {}
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_size(&mut self, size: Size) {
        (**self).set_size(size);
    }

    fn set_transform(&mut self, transform: &VisualTransform) {
        (**self).set_transform(transform);
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        (**self).set_visibility(visibility);
    }
}

/// Accumulated transform of one element.
///
/// Each part accumulates independently. Composition happens in
/// [`TransformState::visual`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Running sum of move deltas.
    pub translate: Vec2,
    /// Top-left displacement caused by resizing from the left or top.
    pub resize_offset: Vec2,
    /// Product of scale factors.
    pub scale: Vec2,
    /// Absolute rotation in degrees.
    pub rotation: f64,
    /// Last successfully solved warp.
    pub warp_matrix: Option<ProjectiveMatrix>,
}

impl TransformState {
    /// The untransformed state.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        resize_offset: Vec2::ZERO,
        scale: Vec2::new(1.0, 1.0),
        rotation: 0.0,
        warp_matrix: None,
    };

    /// Translation of the composed transform: move plus resize offset.
    #[must_use]
    pub fn net_translation(&self) -> Vec2 {
        self.translate + self.resize_offset
    }

    /// Composes translate, warp, scale and rotate, outermost first.
    ///
    /// The order is fixed; changing it changes what users see.
    #[must_use]
    pub fn visual(&self) -> VisualTransform {
        let mut out = VisualTransform::new();
        out.push(TransformStage::Translate(self.net_translation()));
        if let Some(m) = self.warp_matrix {
            out.push(TransformStage::Projective(m));
        }
        if self.scale != Vec2::new(1.0, 1.0) {
            out.push(TransformStage::Scale(self.scale));
        }
        if self.rotation != 0.0 {
            out.push(TransformStage::Rotate(self.rotation));
        }
        out
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Owns a [`TransformState`] and the element size, and reports every change
/// to a [`StyleSink`].
#[derive(Debug)]
pub struct TransformAccumulator<S> {
    state: TransformState,
    initial_size: Size,
    size: Size,
    sink: S,
}

impl<S: StyleSink> TransformAccumulator<S> {
    /// Creates an accumulator for an element of `size` and publishes it.
    pub fn new(size: Size, sink: S) -> Self {
        let mut acc = Self {
            state: TransformState::IDENTITY,
            initial_size: size,
            size,
            sink,
        };
        acc.sink.set_size(size);
        acc.publish();
        acc
    }

    /// The accumulated state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// The current element size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The style sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The style sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the accumulator, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Adds a move delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.state.translate += delta;
        self.publish();
    }

    /// Resizes from `side` by `delta`.
    ///
    /// The size is not clamped; dragging past the opposite side yields a
    /// negative dimension.
    pub fn resize(&mut self, side: Side, delta: Vec2) -> ResizeStep {
        let step = geometry::resize(side, self.state.resize_offset, delta);
        self.state.resize_offset = step.offset;
        if step.size_delta != Vec2::ZERO {
            self.size = (self.size.to_vec2() + step.size_delta).to_size();
            self.sink.set_size(self.size);
        }
        self.publish();
        step
    }

    /// Multiplies the accumulated scale by `factor`.
    pub fn scale(&mut self, factor: Vec2) {
        self.state.scale = Vec2::new(
            self.state.scale.x * factor.x,
            self.state.scale.y * factor.y,
        );
        self.publish();
    }

    /// Sets the rotation from the pointer angle around `center`.
    pub fn rotate(&mut self, center: Point, pointer: Point) -> f64 {
        self.state.rotation = geometry::rotate(center, pointer);
        self.publish();
        self.state.rotation
    }

    /// Replaces the warp with the projective map from `source` to `target`.
    ///
    /// On failure the previous warp stays in place.
    pub fn warp(&mut self, source: &Vertices, target: &Vertices) -> Result<(), WarpError> {
        match ProjectiveMatrix::from_quads(source, target) {
            Ok(m) => {
                self.state.warp_matrix = Some(m);
                self.publish();
                Ok(())
            }
            Err(err) => {
                log::debug!("keeping previous warp: {err}");
                Err(err)
            }
        }
    }

    /// Restores the initial state and size.
    pub fn reset(&mut self) {
        self.state = TransformState::IDENTITY;
        self.size = self.initial_size;
        self.sink.set_size(self.size);
        self.publish();
    }

    fn publish(&mut self) {
        let visual = self.state.visual();
        self.sink.set_transform(&visual);
    }
}
