// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: drag tracking and gesture arbitration for UI interactions.
//!
//! This crate provides small, focused state machines for pointer interactions
//! that need state across multiple events:
//!
//! - [`drag`]: Derive start, drag, end and status streams for one interactive point
//! - [`arbiter`]: Remember the latest status of many points so gestures can
//!   exclude each other
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Generic**: Accept application-specific handle ID types
//!
//! The crate does not assume any particular UI framework or event system. It
//! accepts raw pointer positions and produces derived events or status queries
//! that applications interpret.
//!
//! ## Drag Operations
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::{DragEvent, DragTracker};
//!
//! let mut drag = DragTracker::default();
//! drag.press(Point::new(10.0, 10.0));
//!
//! let ev = drag.move_to(Point::new(15.0, 12.0));
//! assert_eq!(
//!     ev,
//!     Some(DragEvent::Drag { from: Point::new(10.0, 10.0), to: Point::new(15.0, 12.0) })
//! );
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod arbiter;
#[cfg(feature = "drag")]
pub mod drag;

/// Whether an interactive point is currently pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragStatus {
    /// The point is pressed and tracking moves.
    Down,
    /// The point was released.
    Up,
}
