// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start and end notifications for gestures.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::{GestureKind, Side};

/// A gesture started or ended.
///
/// Positions are pointer positions of the press or release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureNotice {
    /// The body was pressed and a move began.
    MoveStart(Point),
    /// The move ended.
    MoveEnd(Point),
    /// An anchor was pressed and a resize began.
    ResizeStart(Side, Point),
    /// The resize from this anchor ended.
    ResizeEnd(Side, Point),
    /// An anchor was pressed and a scale began.
    ScaleStart(Side, Point),
    /// The scale from this anchor ended.
    ScaleEnd(Side, Point),
    /// An anchor was pressed and joined a warp.
    WarpStart(Side, Point),
    /// This anchor stopped warping.
    WarpEnd(Side, Point),
    /// The rotation handle was pressed.
    RotateStart(Point),
    /// The rotation ended.
    RotateEnd(Point),
}

impl GestureNotice {
    /// The gesture family this notice belongs to.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::MoveStart(_) | Self::MoveEnd(_) => GestureKind::Move,
            Self::ResizeStart(..) | Self::ResizeEnd(..) => GestureKind::Resize,
            Self::ScaleStart(..) | Self::ScaleEnd(..) => GestureKind::Scale,
            Self::WarpStart(..) | Self::WarpEnd(..) => GestureKind::Warp,
            Self::RotateStart(_) | Self::RotateEnd(_) => GestureKind::Rotate,
        }
    }

    /// Returns `true` for start notices.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(
            self,
            Self::MoveStart(_)
                | Self::ResizeStart(..)
                | Self::ScaleStart(..)
                | Self::WarpStart(..)
                | Self::RotateStart(_)
        )
    }

    /// The anchor involved, for anchor gestures.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match *self {
            Self::ResizeStart(s, _)
            | Self::ResizeEnd(s, _)
            | Self::ScaleStart(s, _)
            | Self::ScaleEnd(s, _)
            | Self::WarpStart(s, _)
            | Self::WarpEnd(s, _) => Some(s),
            _ => None,
        }
    }
}

type Listener = Box<dyn FnMut(&GestureNotice)>;

/// Registered gesture listeners.
#[derive(Default)]
pub(crate) struct Hooks {
    listeners: Vec<Listener>,
}

impl Hooks {
    pub(crate) fn add(&mut self, listener: impl FnMut(&GestureNotice) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn emit(&mut self, notice: GestureNotice) {
        log::debug!("{notice:?}");
        for listener in &mut self.listeners {
            listener(&notice);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
