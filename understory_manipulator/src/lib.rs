// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_manipulator --heading-base-level=0

//! Understory Manipulator: headless direct manipulation of a rectangular element.
//!
//! A [`Manipulator`] turns pointer input on one element into a move, resize,
//! scale, rotate or perspective warp, and accumulates the result into a
//! [`TransformState`]. It owns no scene: every size, transform and
//! visibility change is reported through a [`StyleSink`].
//!
//! ## Pieces
//!
//! - [`Side`], [`SideMap`], [`SideSet`]: the nine anchor positions.
//! - [`geometry`]: pure formulas for each gesture.
//! - [`Options`]: which gestures are enabled, and the affordance [`Visibility`] they imply.
//! - [`TransformAccumulator`]: owns the [`TransformState`] and the element size.
//! - [`VisualTransform`]: the composed transform, printable as CSS.
//! - [`pipeline`]: middleware between drag steps and the reducers.
//! - [`GestureNotice`]: start and end notifications.
//! - [`AnchorLayout`]: where anchors and the rotation handle sit, and hit testing.
//!
//! Drag tracking and gesture arbitration come from `understory_event_state`;
//! the warp solver comes from `understory_homography`.
//!
//! ## Gesture rules
//!
//! - A press on a handle starts at most one gesture. Presses on other handles
//!   while a gesture runs do not start another one, except that further
//!   corners may join a warp.
//! - Moving the body never starts, and never advances, while an anchor or the
//!   rotation handle is down.
//! - A release anywhere ends every active drag.
//! - Resize, scale and warp share the anchors; at most one of them is enabled,
//!   by precedence warp > resize > scale.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_manipulator::{Handle, Manipulator, PointerInput, Side};
//!
//! let mut element = Manipulator::new(Rect::new(0.0, 0.0, 100.0, 50.0), ());
//!
//! // Drag the bottom-right anchor outwards: the default options resize.
//! element.handle(&PointerInput::press(
//!     Point::new(100.0, 50.0),
//!     Some(Handle::Anchor(Side::BottomRight)),
//! ));
//! element.handle(&PointerInput::move_to(Point::new(120.0, 60.0)));
//! element.handle(&PointerInput::release(Point::new(120.0, 60.0)));
//!
//! assert_eq!(element.size(), Size::new(120.0, 60.0));
//! assert_eq!(element.state().visual().to_string(), "translate(0px,0px)");
//! ```
//!
//! ## Logging
//!
//! Gesture starts and ends and rejected warps are logged through the `log`
//! facade at debug level, reducer input at trace level, and conflicting
//! options at warn level. No logger is installed.
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): [`PointerInput::from_ui_event`] for `ui-events` pointer events.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod accumulator;
pub mod geometry;
pub mod hooks;
mod input;
mod layout;
mod manipulator;
mod options;
pub mod pipeline;
mod side;
mod visual;

pub use accumulator::{StyleSink, TransformAccumulator, TransformState};
pub use hooks::GestureNotice;
pub use input::{PointerInput, PointerKind};
pub use layout::{AnchorLayout, Handle};
pub use manipulator::{GestureState, Manipulator};
pub use options::{AnchorMode, GestureKind, Options, OptionsPatch, Visibility};
pub use side::{ParseSideError, Side, SideMap, SideSet};
pub use visual::{TransformStage, VisualTransform};

pub use understory_homography::{ProjectiveMatrix, Vertices, WarpError};
