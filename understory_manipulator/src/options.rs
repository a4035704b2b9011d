// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture capabilities and the visibility they imply.
//!
//! Resize, scale and warp all drive the same anchors, so at most one of them
//! is active. When more than one is requested the winner is picked by the
//! precedence **warp > resize > scale**, and the conflict is logged at warn
//! level.

/// A family of gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Dragging the element body.
    Move,
    /// Dragging an anchor to change the size.
    Resize,
    /// Dragging an anchor to scale about the center.
    Scale,
    /// Dragging the rotation handle.
    Rotate,
    /// Dragging corner anchors to warp the element.
    Warp,
}

/// The gesture the anchors drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorMode {
    /// Anchors resize the element.
    Resize,
    /// Anchors scale the element about its center.
    Scale,
    /// Corner anchors warp the element.
    Warp,
}

impl AnchorMode {
    /// The gesture family driven in this mode.
    #[must_use]
    pub const fn gesture(self) -> GestureKind {
        match self {
            Self::Resize => GestureKind::Resize,
            Self::Scale => GestureKind::Scale,
            Self::Warp => GestureKind::Warp,
        }
    }
}

/// Which affordances should be shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    /// The outline frame around the element.
    pub frame: bool,
    /// The eight visible anchors.
    pub anchors: bool,
    /// The rotation handle.
    pub rotation_handle: bool,
}

impl Visibility {
    /// Everything hidden.
    pub const HIDDEN: Self = Self {
        frame: false,
        anchors: false,
        rotation_handle: false,
    };
}

/// Per-element gesture configuration.
///
/// ```
/// use understory_manipulator::{AnchorMode, Options};
///
/// let options = Options::default().warpable(true);
/// assert_eq!(options.anchor_mode(), Some(AnchorMode::Warp));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// The body can be dragged to move the element.
    pub draggable: bool,
    /// Anchors resize the element.
    pub resizable: bool,
    /// Anchors scale the element.
    pub scalable: bool,
    /// The rotation handle rotates the element.
    pub rotatable: bool,
    /// Corner anchors warp the element.
    pub warpable: bool,
    /// Master switch. When off no gesture runs and nothing is shown.
    pub interactive: bool,
    /// Scale gestures keep the aspect ratio.
    pub keep_ratio: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            draggable: true,
            resizable: true,
            scalable: false,
            rotatable: true,
            warpable: false,
            interactive: true,
            keep_ratio: false,
        }
    }
}

impl Options {
    /// Sets [`Options::draggable`].
    #[must_use]
    pub fn draggable(mut self, value: bool) -> Self {
        self.draggable = value;
        self
    }

    /// Sets [`Options::resizable`].
    #[must_use]
    pub fn resizable(mut self, value: bool) -> Self {
        self.resizable = value;
        self
    }

    /// Sets [`Options::scalable`].
    #[must_use]
    pub fn scalable(mut self, value: bool) -> Self {
        self.scalable = value;
        self
    }

    /// Sets [`Options::rotatable`].
    #[must_use]
    pub fn rotatable(mut self, value: bool) -> Self {
        self.rotatable = value;
        self
    }

    /// Sets [`Options::warpable`].
    #[must_use]
    pub fn warpable(mut self, value: bool) -> Self {
        self.warpable = value;
        self
    }

    /// Sets [`Options::interactive`].
    #[must_use]
    pub fn interactive(mut self, value: bool) -> Self {
        self.interactive = value;
        self
    }

    /// Sets [`Options::keep_ratio`].
    #[must_use]
    pub fn keep_ratio(mut self, value: bool) -> Self {
        self.keep_ratio = value;
        self
    }

    /// The anchor gesture, by precedence warp > resize > scale.
    #[must_use]
    pub fn anchor_mode(&self) -> Option<AnchorMode> {
        if self.warpable {
            Some(AnchorMode::Warp)
        } else if self.resizable {
            Some(AnchorMode::Resize)
        } else if self.scalable {
            Some(AnchorMode::Scale)
        } else {
            None
        }
    }

    /// Replaces the anchor capabilities with exactly `mode`.
    pub fn set_anchor_mode(&mut self, mode: Option<AnchorMode>) {
        self.warpable = mode == Some(AnchorMode::Warp);
        self.resizable = mode == Some(AnchorMode::Resize);
        self.scalable = mode == Some(AnchorMode::Scale);
    }

    /// Keeps only the winning anchor capability, warning about conflicts.
    #[must_use]
    pub fn resolve(mut self) -> Self {
        let requested = [self.warpable, self.resizable, self.scalable]
            .into_iter()
            .filter(|f| *f)
            .count();
        let mode = self.anchor_mode();
        if requested > 1 {
            log::warn!(
                "conflicting anchor capabilities (warpable: {}, resizable: {}, scalable: {}); using {mode:?}",
                self.warpable,
                self.resizable,
                self.scalable,
            );
        }
        self.set_anchor_mode(mode);
        self
    }

    /// Merges a partial update.
    ///
    /// An anchor capability present in the patch replaces the whole anchor
    /// capability set. Other flags merge one by one.
    pub fn update(&mut self, patch: OptionsPatch) {
        if let Some(mode) = patch.anchor_mode() {
            self.set_anchor_mode(mode);
        }
        if let Some(v) = patch.draggable {
            self.draggable = v;
        }
        if let Some(v) = patch.rotatable {
            self.rotatable = v;
        }
        if let Some(v) = patch.interactive {
            self.interactive = v;
        }
        if let Some(v) = patch.keep_ratio {
            self.keep_ratio = v;
        }
    }

    /// Returns `true` if gestures of `kind` may run.
    #[must_use]
    pub fn permits(&self, kind: GestureKind) -> bool {
        if !self.interactive {
            return false;
        }
        match kind {
            GestureKind::Move => self.draggable,
            GestureKind::Rotate => self.rotatable,
            GestureKind::Resize | GestureKind::Scale | GestureKind::Warp => {
                self.anchor_mode().map(AnchorMode::gesture) == Some(kind)
            }
        }
    }

    /// Affordances to show for the given focus state.
    #[must_use]
    pub fn visibility(&self, focused: bool) -> Visibility {
        if !(self.interactive && focused) {
            return Visibility::HIDDEN;
        }
        Visibility {
            frame: self.draggable,
            anchors: self.anchor_mode().is_some(),
            rotation_handle: self.rotatable,
        }
    }
}

/// A partial [`Options`] update; `None` leaves a flag as it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionsPatch {
    /// New [`Options::draggable`].
    pub draggable: Option<bool>,
    /// New [`Options::resizable`].
    pub resizable: Option<bool>,
    /// New [`Options::scalable`].
    pub scalable: Option<bool>,
    /// New [`Options::rotatable`].
    pub rotatable: Option<bool>,
    /// New [`Options::warpable`].
    pub warpable: Option<bool>,
    /// New [`Options::interactive`].
    pub interactive: Option<bool>,
    /// New [`Options::keep_ratio`].
    pub keep_ratio: Option<bool>,
}

impl OptionsPatch {
    /// Sets the draggable flag.
    #[must_use]
    pub fn draggable(mut self, value: bool) -> Self {
        self.draggable = Some(value);
        self
    }

    /// Sets the resizable flag.
    #[must_use]
    pub fn resizable(mut self, value: bool) -> Self {
        self.resizable = Some(value);
        self
    }

    /// Sets the scalable flag.
    #[must_use]
    pub fn scalable(mut self, value: bool) -> Self {
        self.scalable = Some(value);
        self
    }

    /// Sets the rotatable flag.
    #[must_use]
    pub fn rotatable(mut self, value: bool) -> Self {
        self.rotatable = Some(value);
        self
    }

    /// Sets the warpable flag.
    #[must_use]
    pub fn warpable(mut self, value: bool) -> Self {
        self.warpable = Some(value);
        self
    }

    /// Sets the interactive flag.
    #[must_use]
    pub fn interactive(mut self, value: bool) -> Self {
        self.interactive = Some(value);
        self
    }

    /// Sets the keep-ratio flag.
    #[must_use]
    pub fn keep_ratio(mut self, value: bool) -> Self {
        self.keep_ratio = Some(value);
        self
    }

    /// The anchor capability this patch sets, if any.
    ///
    /// The outer `None` means the patch leaves anchors alone; `Some(None)`
    /// disables them.
    fn anchor_mode(&self) -> Option<Option<AnchorMode>> {
        let present = [self.warpable, self.resizable, self.scalable]
            .into_iter()
            .filter(Option::is_some)
            .count();
        if present > 1 {
            log::warn!("options patch sets several anchor capabilities; warp > resize > scale");
        }
        let pick = |flag: bool, mode| flag.then_some(mode);
        if let Some(v) = self.warpable {
            Some(pick(v, AnchorMode::Warp))
        } else if let Some(v) = self.resizable {
            Some(pick(v, AnchorMode::Resize))
        } else {
            self.scalable.map(|v| pick(v, AnchorMode::Scale))
        }
    }
}
