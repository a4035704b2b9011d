// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties every gesture implementation must keep.

use kurbo::{Point, Rect, Size, Vec2};
use understory_event_state::DragStatus;
use understory_manipulator::geometry::{resize, rotate, scale};
use understory_manipulator::{
    GestureNotice, GestureState, Handle, Manipulator, PointerInput, ProjectiveMatrix, Side,
    TransformAccumulator, TransformState, Vertices, WarpError,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn resize_corner_symmetry() {
    let delta = Vec2::new(5.0, 3.0);
    let tl = resize(Side::TopLeft, Vec2::ZERO, delta);
    assert_eq!(tl.size_delta, Vec2::new(-5.0, -3.0));
    assert_eq!(tl.offset, Vec2::new(5.0, 3.0));

    let br = resize(Side::BottomRight, Vec2::ZERO, delta);
    assert_eq!(br.size_delta, Vec2::new(5.0, 3.0));
    assert_eq!(br.offset, Vec2::ZERO);
}

#[test]
fn scale_identity_for_zero_delta() {
    for rect in [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(-20.0, 5.0, 40.0, 7.5),
        Rect::new(3.0, 3.0, 3.0, 9.0),
    ] {
        let v = Vertices::from_rect(rect);
        for side in Side::ALL {
            assert_eq!(
                scale(&v, side, Vec2::ZERO),
                Vec2::new(1.0, 1.0),
                "{side} on {rect:?}"
            );
        }
    }
}

#[test]
fn rotation_determinism() {
    assert!(approx(rotate(Point::ZERO, Point::new(0.0, -1.0)), 0.0));
    assert!(approx(rotate(Point::ZERO, Point::new(1.0, 0.0)), 90.0));
}

#[test]
fn solver_round_trip() {
    let quad = Vertices::new(
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    );
    let m = ProjectiveMatrix::from_quads(&quad, &quad).unwrap();
    assert!(m.approx_eq(&ProjectiveMatrix::IDENTITY, 1e-9), "{m:?}");
}

#[test]
fn solver_failure_leaves_warp_unchanged() {
    let source = Vertices::from_size(Size::new(10.0, 10.0));
    let mut acc = TransformAccumulator::new(Size::new(10.0, 10.0), ());

    let mut bent = source;
    bent.0[Vertices::TOP_RIGHT] = Point::new(12.0, -1.0);
    acc.warp(&source, &bent).unwrap();
    let before = *acc.state();

    let collinear = Vertices::new(
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 0.0),
    );
    assert_eq!(acc.warp(&source, &collinear), Err(WarpError::Degenerate));
    assert_eq!(*acc.state(), before);
}

#[test]
fn body_press_during_anchor_drag_does_not_move() {
    let mut m = Manipulator::new(Rect::new(0.0, 0.0, 100.0, 50.0), ());
    let starts = std::rc::Rc::new(std::cell::Cell::new(0));
    let seen = starts.clone();
    m.on_gesture(move |n| {
        if n.is_start() {
            seen.set(seen.get() + 1);
        }
    });

    m.handle(&PointerInput::press(
        Point::new(0.0, 0.0),
        Some(Handle::Anchor(Side::TopLeft)),
    ));
    m.handle(&PointerInput::move_to(Point::new(5.0, 3.0)));
    m.handle(&PointerInput::press(Point::new(5.0, 3.0), Some(Handle::Body)));
    assert_eq!(m.gesture(), GestureState::Resizing(Side::TopLeft));
    m.handle(&PointerInput::move_to(Point::new(8.0, 4.0)));
    m.handle(&PointerInput::release(Point::new(8.0, 4.0)));
    m.handle(&PointerInput::release(Point::new(8.0, 4.0)));

    let state = m.state();
    assert_eq!(state.translate, Vec2::ZERO, "body move leaked through");
    assert_eq!(state.resize_offset, Vec2::new(8.0, 4.0));
    assert_eq!(m.size(), Size::new(92.0, 46.0));
    // Only the resize start was announced.
    assert_eq!(starts.get(), 1);
    assert_eq!(m.gesture(), GestureState::Idle);
}

#[test]
fn zero_deltas_leave_state_unchanged() {
    let mut acc = TransformAccumulator::new(Size::new(30.0, 20.0), ());
    acc.translate(Vec2::new(4.0, 2.0));
    acc.scale(Vec2::new(1.5, 1.0));
    let before = *acc.state();
    let size = acc.size();
    let vertices = Vertices::from_size(size);

    for _ in 0..5 {
        acc.translate(Vec2::ZERO);
        for side in Side::ALL {
            acc.resize(side, Vec2::ZERO);
            acc.scale(scale(&vertices, side, Vec2::ZERO));
        }
    }
    assert_eq!(*acc.state(), before);
    assert_eq!(acc.size(), size);
    assert_ne!(before, TransformState::IDENTITY);
}

#[test]
fn body_press_and_release_while_anchor_is_down_adds_no_move() {
    let mut m = Manipulator::new(Rect::new(0.0, 0.0, 100.0, 50.0), ());
    let moves = std::rc::Rc::new(std::cell::Cell::new(0));
    let seen = moves.clone();
    m.on_gesture(move |n| {
        if matches!(n, GestureNotice::MoveStart(_) | GestureNotice::MoveEnd(_)) {
            seen.set(seen.get() + 1);
        }
    });

    // Press anchor, move, press body, move the body, release body, release anchor.
    m.handle(&PointerInput::press(
        Point::new(0.0, 0.0),
        Some(Handle::Anchor(Side::TopLeft)),
    ));
    m.handle(&PointerInput::move_to(Point::new(5.0, 3.0)));
    m.handle(&PointerInput::press(Point::new(5.0, 3.0), Some(Handle::Body)));
    assert_eq!(m.status(Handle::Body), Some(DragStatus::Down));
    m.handle(&PointerInput::move_to(Point::new(7.0, 3.0)));
    m.handle(&PointerInput::release(Point::new(7.0, 3.0)));
    assert_eq!(m.status(Handle::Body), Some(DragStatus::Up));
    m.handle(&PointerInput::release(Point::new(7.0, 3.0)));

    let state = m.state();
    assert_eq!(state.translate, Vec2::ZERO, "body move leaked through");
    assert_eq!(state.resize_offset, Vec2::new(7.0, 3.0));
    assert_eq!(m.size(), Size::new(93.0, 47.0));
    assert_eq!(moves.get(), 0);
    assert_eq!(m.gesture(), GestureState::Idle);
}
