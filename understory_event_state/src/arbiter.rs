// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture arbitration: remember the latest [`DragStatus`] of every tracked point.
//!
//! Several interactive points of one element (the body, each anchor, a
//! rotation handle) can all receive presses. A gesture that must not run
//! alongside another asks the [`StatusBoard`] whether every competing point is
//! clear. A point is clear when its latest status is [`DragStatus::Up`] or
//! when it was never pressed at all.
//!
//! ```
//! use understory_event_state::DragStatus;
//! use understory_event_state::arbiter::StatusBoard;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Point { Body, Anchor(u8) }
//!
//! let mut board = StatusBoard::new();
//! // Nothing recorded yet: everything is clear.
//! assert!(board.is_clear(|_| true));
//!
//! board.record(Point::Anchor(2), DragStatus::Down);
//! // Moving the body competes with every anchor.
//! assert!(!board.is_clear(|p| matches!(p, Point::Anchor(_))));
//!
//! board.record(Point::Anchor(2), DragStatus::Up);
//! assert!(board.is_clear(|p| matches!(p, Point::Anchor(_))));
//! ```

use alloc::vec::Vec;

use crate::DragStatus;

/// The latest drag status of a set of keyed points.
///
/// Lookups are linear; the board is meant for a handful of handles per element.
#[derive(Clone, Debug)]
pub struct StatusBoard<K> {
    entries: Vec<(K, DragStatus)>,
}

impl<K> Default for StatusBoard<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> StatusBoard<K> {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest status of `key`, replacing any previous status.
    pub fn record(&mut self, key: K, status: DragStatus) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, s)) => *s = status,
            None => self.entries.push((key, status)),
        }
    }

    /// Latest status of `key`, or `None` if it was never recorded.
    #[must_use]
    pub fn latest(&self, key: &K) -> Option<DragStatus> {
        self.entries
            .iter()
            .find_map(|(k, s)| (k == key).then_some(*s))
    }

    /// Returns `true` if every recorded point for which `competes` returns
    /// `true` is up.
    ///
    /// Points that were never recorded are clear.
    pub fn is_clear(&self, mut competes: impl FnMut(&K) -> bool) -> bool {
        self.entries
            .iter()
            .all(|(k, s)| *s == DragStatus::Up || !competes(k))
    }

    /// Iterates over the points whose latest status is down.
    pub fn down(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries
            .iter()
            .filter_map(|(k, s)| (*s == DragStatus::Down).then_some(k))
    }

    /// Forgets every recorded status.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Handle {
        Body,
        Left,
        Right,
        Rotate,
    }

    fn is_anchor(h: &Handle) -> bool {
        matches!(h, Handle::Left | Handle::Right)
    }

    #[test]
    fn empty_board_is_clear() {
        let board = StatusBoard::<Handle>::new();
        assert!(board.is_clear(|_| true));
        assert_eq!(board.latest(&Handle::Body), None);
        assert_eq!(board.down().count(), 0);
    }

    #[test]
    fn down_competitor_blocks() {
        let mut board = StatusBoard::new();
        board.record(Handle::Left, DragStatus::Down);
        assert!(!board.is_clear(is_anchor));
        // A gesture that does not compete with anchors is unaffected.
        assert!(board.is_clear(|h| *h == Handle::Rotate));
    }

    #[test]
    fn record_replaces_previous_status() {
        let mut board = StatusBoard::new();
        board.record(Handle::Right, DragStatus::Down);
        board.record(Handle::Right, DragStatus::Up);
        assert_eq!(board.latest(&Handle::Right), Some(DragStatus::Up));
        assert!(board.is_clear(is_anchor));
    }

    #[test]
    fn down_lists_only_pressed_points() {
        let mut board = StatusBoard::new();
        board.record(Handle::Body, DragStatus::Down);
        board.record(Handle::Left, DragStatus::Up);
        board.record(Handle::Rotate, DragStatus::Down);
        let down: Vec<_> = board.down().copied().collect();
        assert_eq!(down, [Handle::Body, Handle::Rotate]);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut board = StatusBoard::new();
        board.record(Handle::Body, DragStatus::Down);
        board.clear();
        assert_eq!(board.latest(&Handle::Body), None);
        assert!(board.is_clear(|_| true));
    }
}
