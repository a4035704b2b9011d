// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as seen by a [`Manipulator`](crate::Manipulator).

use kurbo::Point;

use crate::Handle;

/// What happened to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A button went down.
    Press,
    /// A button went up.
    Release,
    /// The pointer moved.
    Move,
    /// The pointer entered the element.
    Enter,
    /// The pointer left the element.
    Leave,
}

/// One pointer event, already hit tested against the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// The kind of event.
    pub kind: PointerKind,
    /// Pointer position, in the same space as the element rectangle.
    pub position: Point,
    /// The handle under the pointer, if any.
    pub target: Option<Handle>,
}

impl PointerInput {
    /// A press at `position` over `target`.
    #[must_use]
    pub fn press(position: Point, target: Option<Handle>) -> Self {
        Self {
            kind: PointerKind::Press,
            position,
            target,
        }
    }

    /// A release at `position`. Releases end drags wherever they happen.
    #[must_use]
    pub fn release(position: Point) -> Self {
        Self {
            kind: PointerKind::Release,
            position,
            target: None,
        }
    }

    /// A move to `position`.
    #[must_use]
    pub fn move_to(position: Point) -> Self {
        Self {
            kind: PointerKind::Move,
            position,
            target: None,
        }
    }

    /// The pointer entered the element.
    #[must_use]
    pub fn enter(position: Point) -> Self {
        Self {
            kind: PointerKind::Enter,
            position,
            target: Some(Handle::Body),
        }
    }

    /// The pointer left the element.
    #[must_use]
    pub fn leave(position: Point) -> Self {
        Self {
            kind: PointerKind::Leave,
            position,
            target: None,
        }
    }
}

#[cfg(feature = "ui_events_adapter")]
mod ui_events_adapter {
    use ui_events::pointer::PointerEvent;

    use super::{PointerInput, PointerKind};
    use crate::Handle;

    impl PointerInput {
        /// Converts a `ui-events` pointer event, using logical coordinates.
        ///
        /// Only button presses, releases and moves carry a position; every
        /// other event returns `None`. `target` is the hit-tested handle and is
        /// ignored for releases and moves.
        #[must_use]
        pub fn from_ui_event(event: &PointerEvent, target: Option<Handle>) -> Option<Self> {
            let (kind, position) = match event {
                PointerEvent::Down(e) => (PointerKind::Press, e.state.logical_point()),
                PointerEvent::Up(e) => (PointerKind::Release, e.state.logical_point()),
                PointerEvent::Move(e) => (PointerKind::Move, e.current.logical_point()),
                _ => return None,
            };
            let target = (kind == PointerKind::Press).then_some(target).flatten();
            Some(Self {
                kind,
                position,
                target,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(PointerInput::press(p, Some(Handle::Body)).kind, PointerKind::Press);
        assert_eq!(PointerInput::release(p).target, None);
        assert_eq!(PointerInput::move_to(p).kind, PointerKind::Move);
        assert_eq!(PointerInput::enter(p).target, Some(Handle::Body));
        assert_eq!(PointerInput::leave(p).kind, PointerKind::Leave);
    }
}
