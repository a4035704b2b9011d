// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element gesture wiring.

use kurbo::{Point, Rect, Size, Vec2};
use understory_event_state::DragStatus;
use understory_event_state::arbiter::StatusBoard;
use understory_event_state::drag::{DragEvent, DragTracker};
use understory_homography::Vertices;

use crate::geometry;
use crate::hooks::{GestureNotice, Hooks};
use crate::pipeline::{AnchorDrag, Pipelines, PointerDrag, RotationDrag, WarpDrag};
use crate::{
    AnchorLayout, AnchorMode, GestureKind, Handle, Options, OptionsPatch, PointerInput,
    PointerKind, Side, SideMap, SideSet, StyleSink, TransformAccumulator, TransformState,
    Visibility,
};

/// The gesture an element is currently performing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture.
    #[default]
    Idle,
    /// The body is being dragged.
    Moving,
    /// An anchor is resizing the element.
    Resizing(Side),
    /// An anchor is scaling the element.
    Scaling(Side),
    /// The rotation handle is being dragged.
    Rotating,
    /// These corner anchors are warping the element.
    Warping(SideSet),
}

impl GestureState {
    /// The family of the active gesture.
    #[must_use]
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Moving => Some(GestureKind::Move),
            Self::Resizing(_) => Some(GestureKind::Resize),
            Self::Scaling(_) => Some(GestureKind::Scale),
            Self::Rotating => Some(GestureKind::Rotate),
            Self::Warping(_) => Some(GestureKind::Warp),
        }
    }
}

/// Turns pointer input on one element into an accumulated transform.
///
/// Every interactive point (the body, eight anchors and the rotation handle)
/// has its own drag tracker. A press starts at most one gesture; moving the
/// body never starts while an anchor or the rotation handle is down. Each
/// accepted drag step runs through the gesture's [`Pipeline`](crate::pipeline::Pipeline)
/// and then updates the [`TransformAccumulator`], which reports to the
/// [`StyleSink`].
///
/// ```
/// use kurbo::{Point, Rect, Vec2};
/// use understory_manipulator::{Handle, Manipulator, PointerInput};
///
/// let mut m = Manipulator::new(Rect::new(0.0, 0.0, 100.0, 50.0), ());
/// m.handle(&PointerInput::press(Point::new(10.0, 10.0), Some(Handle::Body)));
/// assert!(m.handle(&PointerInput::move_to(Point::new(30.0, 15.0))));
/// m.handle(&PointerInput::release(Point::new(30.0, 15.0)));
///
/// assert_eq!(m.state().translate, Vec2::new(20.0, 5.0));
/// ```
#[derive(Debug)]
pub struct Manipulator<S> {
    origin: Point,
    options: Options,
    focused: bool,
    hovered: bool,
    gesture: GestureState,
    body: DragTracker,
    anchors: SideMap<DragTracker>,
    rotation_handle: DragTracker,
    board: StatusBoard<Handle>,
    warp_distances: SideMap<Vec2>,
    pipelines: Pipelines,
    hooks: Hooks,
    accumulator: TransformAccumulator<S>,
}

impl<S: StyleSink> Manipulator<S> {
    /// Manipulates an element laid out at `rect`, with default options.
    ///
    /// Pointer positions passed to [`Manipulator::handle`] are in the same
    /// space as `rect`.
    pub fn new(rect: Rect, sink: S) -> Self {
        let mut m = Self {
            origin: rect.origin(),
            options: Options::default(),
            focused: false,
            hovered: false,
            gesture: GestureState::Idle,
            body: DragTracker::default(),
            anchors: SideMap::default(),
            rotation_handle: DragTracker::default(),
            board: StatusBoard::new(),
            warp_distances: SideMap::default(),
            pipelines: Pipelines::default(),
            hooks: Hooks::default(),
            accumulator: TransformAccumulator::new(rect.size(), sink),
        };
        m.push_visibility();
        m
    }

    /// Replaces the options, builder style.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.set_options(options);
        self
    }

    /// Processes one pointer event and returns whether the transform changed.
    pub fn handle(&mut self, input: &PointerInput) -> bool {
        match input.kind {
            PointerKind::Press => {
                self.press(input.position, input.target);
                false
            }
            PointerKind::Release => {
                self.release(input.position);
                false
            }
            PointerKind::Move => self.pointer_move(input.position),
            PointerKind::Enter => {
                self.hovered = true;
                false
            }
            PointerKind::Leave => {
                self.hovered = false;
                false
            }
        }
    }

    /// Registers a listener for gesture start and end notices.
    pub fn on_gesture(&mut self, listener: impl FnMut(&GestureNotice) + 'static) -> &mut Self {
        self.hooks.add(listener);
        self
    }

    /// The per-gesture middleware.
    pub fn pipelines_mut(&mut self) -> &mut Pipelines {
        &mut self.pipelines
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options, resolving anchor conflicts.
    pub fn set_options(&mut self, options: Options) {
        self.options = options.resolve();
        self.push_visibility();
    }

    /// Merges a partial options update.
    pub fn update_options(&mut self, patch: OptionsPatch) {
        self.options.update(patch);
        self.push_visibility();
    }

    /// The active gesture.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// The accumulated transform.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        self.accumulator.state()
    }

    /// The current element size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.accumulator.size()
    }

    /// The accumulator.
    #[must_use]
    pub fn accumulator(&self) -> &TransformAccumulator<S> {
        &self.accumulator
    }

    /// The style sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        self.accumulator.sink()
    }

    /// Consumes the manipulator, returning its sink.
    pub fn into_sink(self) -> S {
        self.accumulator.into_sink()
    }

    /// Restores the initial transform, size and warp distances.
    ///
    /// No gesture resets the state on its own.
    pub fn reset(&mut self) {
        self.accumulator.reset();
        self.warp_distances = SideMap::default();
    }

    /// Whether the element has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pointer is over the element.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Focuses or blurs the element. Ignored while not interactive.
    pub fn set_focus(&mut self, focused: bool) {
        if !self.options.interactive || self.focused == focused {
            return;
        }
        self.focused = focused;
        self.push_visibility();
    }

    /// Affordances that should currently be shown.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.options.visibility(self.focused)
    }

    /// Latest drag status of `handle`, or `None` if it was never pressed.
    #[must_use]
    pub fn status(&self, handle: Handle) -> Option<DragStatus> {
        self.board.latest(&handle)
    }

    /// Where the active drag on `handle` started, or `None` if it is not down.
    #[must_use]
    pub fn drag_start(&self, handle: Handle) -> Option<Point> {
        self.tracker(handle).start_pos()
    }

    /// Offset of `pos` from the start of the active drag on `handle`.
    #[must_use]
    pub fn drag_offset(&self, handle: Handle, pos: Point) -> Option<Vec2> {
        self.tracker(handle).total_offset(pos)
    }

    /// Accumulated warp displacement of the corner at `side`.
    #[must_use]
    pub fn warp_distance(&self, side: Side) -> Vec2 {
        self.warp_distances[side]
    }

    /// Anchor placement for the current size.
    #[must_use]
    pub fn layout(&self) -> AnchorLayout {
        AnchorLayout::new(self.size())
    }

    /// The translated and resized element box, before scale and rotation.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let o = self.origin + self.state().net_translation();
        let size = self.size();
        Rect::new(o.x, o.y, o.x + size.width, o.y + size.height)
    }

    /// Corners of [`Manipulator::bounds`] scaled about its center by the
    /// accumulated scale.
    #[must_use]
    pub fn vertices(&self) -> Vertices {
        let bounds = self.bounds();
        let c = bounds.center();
        let s = self.state().scale;
        let v = Vertices::from_rect(bounds);
        Vertices(v.0.map(|p| {
            let d = p - c;
            c + Vec2::new(d.x * s.x, d.y * s.y)
        }))
    }

    /// Pivot of rotation gestures, rounded to whole pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        geometry::center_from_vertices(&self.vertices())
    }

    /// The visible handle under `point`, given in the same space as the
    /// element rectangle.
    ///
    /// Warped elements are hit tested in their unwarped, translated frame.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Handle> {
        let offset = point - self.origin;
        let local = match self.state().visual().to_affine(self.size()) {
            Some(affine) => affine.inverse() * offset.to_point(),
            None => (offset - self.state().net_translation()).to_point(),
        };
        self.layout().hit_test(local, self.visibility())
    }

    fn tracker(&self, handle: Handle) -> &DragTracker {
        match handle {
            Handle::Body => &self.body,
            Handle::Anchor(side) => &self.anchors[side],
            Handle::RotationHandle => &self.rotation_handle,
        }
    }

    fn record(&mut self, handle: Handle, event: DragEvent) {
        if let Some(status) = event.status_change() {
            self.board.record(handle, status);
        }
    }

    fn push_visibility(&mut self) {
        let visibility = self.visibility();
        self.accumulator.sink_mut().set_visibility(visibility);
    }

    fn begin(&mut self, state: GestureState, notice: GestureNotice) {
        self.gesture = state;
        self.hooks.emit(notice);
    }

    fn finish(&mut self, notice: GestureNotice) {
        self.gesture = GestureState::Idle;
        self.hooks.emit(notice);
    }

    /// Moving competes with every other handle.
    fn move_is_clear(&self) -> bool {
        self.board.is_clear(|h| *h != Handle::Body)
    }

    fn press(&mut self, pos: Point, target: Option<Handle>) {
        self.set_focus(target.is_some());
        let Some(handle) = target else {
            return;
        };
        match handle {
            Handle::Body => {
                let start = self.body.press(pos);
                self.record(handle, start);
                if !self.options.permits(GestureKind::Move) {
                    return;
                }
                if self.gesture != GestureState::Idle || !self.move_is_clear() {
                    log::debug!("body press preempted during {:?}", self.gesture);
                    return;
                }
                self.begin(GestureState::Moving, GestureNotice::MoveStart(pos));
            }
            // The center anchor is hidden and never drives a gesture.
            Handle::Anchor(Side::Center) => {}
            Handle::Anchor(side) => {
                let start = self.anchors[side].press(pos);
                self.record(handle, start);
                self.press_anchor(side, pos);
            }
            Handle::RotationHandle => {
                let start = self.rotation_handle.press(pos);
                self.record(handle, start);
                if self.options.permits(GestureKind::Rotate)
                    && self.gesture == GestureState::Idle
                {
                    self.begin(GestureState::Rotating, GestureNotice::RotateStart(pos));
                }
            }
        }
    }

    fn press_anchor(&mut self, side: Side, pos: Point) {
        if !self.options.interactive {
            return;
        }
        let Some(mode) = self.options.anchor_mode() else {
            return;
        };
        if mode == AnchorMode::Warp && !side.is_corner() {
            log::debug!("{side} does not warp");
            return;
        }
        match (mode, self.gesture) {
            (AnchorMode::Warp, GestureState::Warping(set)) => {
                self.begin(
                    GestureState::Warping(set | SideSet::from(side)),
                    GestureNotice::WarpStart(side, pos),
                );
            }
            (AnchorMode::Resize, GestureState::Idle) => {
                self.begin(
                    GestureState::Resizing(side),
                    GestureNotice::ResizeStart(side, pos),
                );
            }
            (AnchorMode::Scale, GestureState::Idle) => {
                self.begin(
                    GestureState::Scaling(side),
                    GestureNotice::ScaleStart(side, pos),
                );
            }
            (AnchorMode::Warp, GestureState::Idle) => {
                self.begin(
                    GestureState::Warping(SideSet::from(side)),
                    GestureNotice::WarpStart(side, pos),
                );
            }
            (_, gesture) => log::debug!("ignoring {side} press during {gesture:?}"),
        }
    }

    /// Ends every drag; a release anywhere ends them all.
    fn release(&mut self, pos: Point) {
        if let Some(end) = self.body.release(pos) {
            self.record(Handle::Body, end);
            if self.gesture == GestureState::Moving {
                self.finish(GestureNotice::MoveEnd(end.position()));
            }
        }
        for side in Side::ALL {
            let Some(end) = self.anchors[side].release(pos) else {
                continue;
            };
            self.record(Handle::Anchor(side), end);
            let pos = end.position();
            match self.gesture {
                GestureState::Resizing(s) if s == side => {
                    self.finish(GestureNotice::ResizeEnd(side, pos));
                }
                GestureState::Scaling(s) if s == side => {
                    self.finish(GestureNotice::ScaleEnd(side, pos));
                }
                GestureState::Warping(set) if set.has(side) => {
                    let rest = set - SideSet::from(side);
                    self.gesture = if rest.is_empty() {
                        GestureState::Idle
                    } else {
                        GestureState::Warping(rest)
                    };
                    self.hooks.emit(GestureNotice::WarpEnd(side, pos));
                }
                _ => {}
            }
        }
        if let Some(end) = self.rotation_handle.release(pos) {
            self.record(Handle::RotationHandle, end);
            if self.gesture == GestureState::Rotating {
                self.finish(GestureNotice::RotateEnd(end.position()));
            }
        }
    }

    fn pointer_move(&mut self, pos: Point) -> bool {
        let mut changed = false;
        if let Some(DragEvent::Drag { from, to }) = self.body.move_to(pos) {
            changed |= self.drag_body(from, to);
        }
        for side in Side::ALL {
            if let Some(DragEvent::Drag { from, to }) = self.anchors[side].move_to(pos) {
                changed |= self.drag_anchor(side, from, to);
            }
        }
        if let Some(DragEvent::Drag { from, to }) = self.rotation_handle.move_to(pos) {
            changed |= self.drag_rotation_handle(from, to);
        }
        changed
    }

    fn drag_body(&mut self, from: Point, to: Point) -> bool {
        if self.gesture != GestureState::Moving
            || !self.options.permits(GestureKind::Move)
            || !self.move_is_clear()
        {
            return false;
        }
        let Some(step) = self.pipelines.moving.run(PointerDrag { from, to }) else {
            return false;
        };
        log::trace!("move by {:?}", step.delta());
        self.accumulator.translate(step.delta());
        true
    }

    fn drag_anchor(&mut self, side: Side, from: Point, to: Point) -> bool {
        let payload = AnchorDrag { side, from, to };
        match self.gesture {
            GestureState::Resizing(s) if s == side && self.options.permits(GestureKind::Resize) => {
                let Some(step) = self.pipelines.resizing.run(payload) else {
                    return false;
                };
                log::trace!("resize {} by {:?}", step.side, step.delta());
                self.accumulator.resize(step.side, step.delta());
                true
            }
            GestureState::Scaling(s) if s == side && self.options.permits(GestureKind::Scale) => {
                let Some(step) = self.pipelines.scaling.run(payload) else {
                    return false;
                };
                let mut factor = geometry::scale(&self.vertices(), step.side, step.delta());
                if self.options.keep_ratio {
                    factor = geometry::uniform(factor);
                }
                log::trace!("scale {} by {factor:?}", step.side);
                self.accumulator.scale(factor);
                true
            }
            GestureState::Warping(set) if set.has(side) && self.options.permits(GestureKind::Warp) => {
                self.warp_distances[side] += to - from;
                let source = Vertices::from_size(self.size());
                let target = geometry::vertices_from_distance(&source, &self.warp_distances);
                let Some(quads) = self.pipelines.warping.run(WarpDrag { source, target }) else {
                    return false;
                };
                log::trace!("warp {side} to {:?}", quads.target);
                self.accumulator.warp(&quads.source, &quads.target).is_ok()
            }
            _ => false,
        }
    }

    fn drag_rotation_handle(&mut self, from: Point, to: Point) -> bool {
        if self.gesture != GestureState::Rotating || !self.options.permits(GestureKind::Rotate) {
            return false;
        }
        let center = self.center();
        let Some(step) = self.pipelines.rotating.run(RotationDrag { center, from, to }) else {
            return false;
        };
        let degrees = self.accumulator.rotate(step.center, step.to);
        log::trace!("rotate to {degrees}deg");
        true
    }
}
