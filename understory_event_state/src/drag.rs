// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracker: derive drag start, drag, drag end and status from raw pointer input.
//!
//! One [`DragTracker`] belongs to one interactive point (a handle, an anchor,
//! an element body). It turns the primitive press / move / release sequence
//! into the four derived streams a gesture needs:
//!
//! - **start**: a press on this point ([`DragEvent::Start`]).
//! - **drag**: a `(from, to)` pair for every move while pressed
//!   ([`DragEvent::Drag`]). Moves that do not change the position emit nothing.
//! - **end**: the first release after the press ([`DragEvent::End`]). The
//!   release does not have to happen over the same point, so a drag ends even
//!   when the pointer has left the element.
//! - **status**: the alternating [`DragStatus`], or `None` before the first press.
//!
//! ## Usage
//!
//! 1) Forward presses that hit this point to [`DragTracker::press`].
//! 2) Forward every move to [`DragTracker::move_to`], wherever it happens.
//! 3) Forward every release to [`DragTracker::release`], wherever it happens.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::DragStatus;
//! use understory_event_state::drag::{DragEvent, DragTracker};
//!
//! let mut drag = DragTracker::default();
//! assert_eq!(drag.status(), None);
//!
//! drag.press(Point::new(10.0, 20.0));
//! assert_eq!(drag.status(), Some(DragStatus::Down));
//!
//! let ev = drag.move_to(Point::new(15.0, 25.0));
//! assert_eq!(
//!     ev,
//!     Some(DragEvent::Drag { from: Point::new(10.0, 20.0), to: Point::new(15.0, 25.0) })
//! );
//!
//! // Same position again: deduplicated.
//! assert_eq!(drag.move_to(Point::new(15.0, 25.0)), None);
//!
//! // Release anywhere ends the drag.
//! assert_eq!(drag.release(Point::new(90.0, 90.0)), Some(DragEvent::End(Point::new(90.0, 90.0))));
//! assert_eq!(drag.status(), Some(DragStatus::Up));
//! ```

use kurbo::{Point, Vec2};

use crate::DragStatus;

/// An event derived by a [`DragTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// The point was pressed at this position.
    Start(Point),
    /// The pointer moved while the point was pressed.
    Drag {
        /// Previous tracked position.
        from: Point,
        /// New position.
        to: Point,
    },
    /// The pointer was released at this position, ending the drag.
    End(Point),
}

impl DragEvent {
    /// The status this event switches to, if it is a start or end event.
    #[must_use]
    pub fn status_change(&self) -> Option<DragStatus> {
        match self {
            Self::Start(_) => Some(DragStatus::Down),
            Self::End(_) => Some(DragStatus::Up),
            Self::Drag { .. } => None,
        }
    }

    /// The position carried by this event (the new position for drags).
    #[must_use]
    pub fn position(&self) -> Point {
        match *self {
            Self::Start(p) | Self::End(p) | Self::Drag { to: p, .. } => p,
        }
    }
}

/// Tracks the drag streams of a single interactive point.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    status: Option<DragStatus>,
    /// Start position of the current drag operation
    start_pos: Option<Point>,
    /// Last tracked pointer position during the current drag
    last_pos: Option<Point>,
}

impl DragTracker {
    /// Records a press on this point, starting a drag at `pos`.
    ///
    /// A press while already dragging restarts the drag from `pos`.
    pub fn press(&mut self, pos: Point) -> DragEvent {
        self.status = Some(DragStatus::Down);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        DragEvent::Start(pos)
    }

    /// Records a pointer move, returning the `(from, to)` pair while dragging.
    ///
    /// Returns `None` when not dragging or when the position did not change.
    pub fn move_to(&mut self, pos: Point) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        let from = self.last_pos.replace(pos).unwrap_or(pos);
        (from != pos).then_some(DragEvent::Drag { from, to: pos })
    }

    /// Records a release anywhere, ending the drag if one is active.
    pub fn release(&mut self, pos: Point) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        self.status = Some(DragStatus::Up);
        self.start_pos = None;
        self.last_pos = None;
        Some(DragEvent::End(pos))
    }

    /// Latest status, or `None` if this point was never pressed.
    #[must_use]
    pub fn status(&self) -> Option<DragStatus> {
        self.status
    }

    /// Returns `true` while a drag operation is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.status == Some(DragStatus::Down)
    }

    /// Position where the current drag started.
    #[must_use]
    pub fn start_pos(&self) -> Option<Point> {
        self.start_pos
    }

    /// Total offset of `current_pos` from the drag start position.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }
}
