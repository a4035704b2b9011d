// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture sequences observed through a recording style sink.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};
use understory_manipulator::pipeline::{AnchorDrag, WarpDrag};
use understory_manipulator::{
    GestureNotice, GestureState, Handle, Manipulator, Options, OptionsPatch, PointerInput, Side,
    SideSet, StyleSink, Visibility, VisualTransform,
};

#[derive(Debug, Default)]
struct Recorder {
    sizes: Vec<Size>,
    transforms: Vec<String>,
    visibility: Vec<Visibility>,
}

impl StyleSink for Recorder {
    fn set_size(&mut self, size: Size) {
        self.sizes.push(size);
    }

    fn set_transform(&mut self, transform: &VisualTransform) {
        self.transforms.push(transform.to_string());
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility.push(visibility);
    }
}

fn element(options: Options) -> Manipulator<Recorder> {
    Manipulator::new(Rect::new(10.0, 20.0, 110.0, 70.0), Recorder::default()).with_options(options)
}

fn drag(m: &mut Manipulator<Recorder>, target: Handle, path: &[(f64, f64)]) {
    let (first, rest) = path.split_first().unwrap();
    m.handle(&PointerInput::press(Point::new(first.0, first.1), Some(target)));
    for &(x, y) in rest {
        m.handle(&PointerInput::move_to(Point::new(x, y)));
    }
    let (x, y) = *path.last().unwrap();
    m.handle(&PointerInput::release(Point::new(x, y)));
}

#[test]
fn move_publishes_css_translation() {
    let mut m = element(Options::default());
    drag(&mut m, Handle::Body, &[(50.0, 40.0), (60.0, 45.0), (70.0, 47.5)]);
    assert_eq!(
        m.sink().transforms.last().map(String::as_str),
        Some("translate(20px,7.5px)")
    );
}

#[test]
fn move_and_resize_compose_into_one_translation() {
    let mut m = element(Options::default());
    drag(&mut m, Handle::Body, &[(50.0, 40.0), (60.0, 40.0)]);
    drag(
        &mut m,
        Handle::Anchor(Side::CenterLeft),
        &[(20.0, 45.0), (25.0, 45.0)],
    );
    let state = m.state();
    assert_eq!(state.translate, Vec2::new(10.0, 0.0));
    assert_eq!(state.resize_offset, Vec2::new(5.0, 0.0));
    assert_eq!(state.net_translation(), Vec2::new(15.0, 0.0));
    assert_eq!(m.size(), Size::new(95.0, 50.0));
    assert_eq!(m.sink().sizes.last(), Some(&Size::new(95.0, 50.0)));
    assert_eq!(m.bounds(), Rect::new(25.0, 20.0, 120.0, 70.0));
}

#[test]
fn rotation_uses_center_of_moved_box() {
    let mut m = element(Options::default());
    drag(&mut m, Handle::Body, &[(50.0, 40.0), (150.0, 40.0)]);
    // Box is now (110, 20)-(210, 70), center (160, 45).
    assert_eq!(m.center(), Point::new(160.0, 45.0));
    drag(
        &mut m,
        Handle::RotationHandle,
        &[(160.0, -10.0), (260.0, 45.0)],
    );
    assert!((m.state().rotation - 90.0).abs() < 1e-9);
    let css = m.sink().transforms.last().unwrap();
    assert!(css.starts_with("translate(100px,0px) rotate("), "{css}");
}

#[test]
fn scale_css_follows_translation() {
    let mut m = element(Options::default().resizable(false).scalable(true));
    drag(
        &mut m,
        Handle::Anchor(Side::BottomCenter),
        &[(60.0, 70.0), (60.0, 80.0)],
    );
    assert_eq!(
        m.sink().transforms.last().map(String::as_str),
        Some("translate(0px,0px) scale(1, 1.4)")
    );
}

#[test]
fn corners_join_an_active_warp() {
    let mut m = element(Options::default().warpable(true));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    m.on_gesture(move |n| sink.borrow_mut().push(*n));

    let tl = Point::new(10.0, 20.0);
    let br = Point::new(110.0, 70.0);
    m.handle(&PointerInput::press(tl, Some(Handle::Anchor(Side::TopLeft))));
    m.handle(&PointerInput::press(br, Some(Handle::Anchor(Side::BottomRight))));
    assert_eq!(
        m.gesture(),
        GestureState::Warping(SideSet::from(Side::TopLeft) | SideSet::from(Side::BottomRight))
    );
    // A single pointer drags both pressed corners.
    m.handle(&PointerInput::move_to(br + Vec2::new(4.0, 2.0)));
    m.handle(&PointerInput::release(br + Vec2::new(4.0, 2.0)));

    assert_eq!(m.gesture(), GestureState::Idle);
    assert_eq!(m.warp_distance(Side::BottomRight), Vec2::new(4.0, 2.0));
    assert_eq!(m.warp_distance(Side::TopLeft), Vec2::new(104.0, 52.0));
    let ends = log
        .borrow()
        .iter()
        .filter(|n| matches!(n, GestureNotice::WarpEnd(..)))
        .count();
    assert_eq!(ends, 2);
    let css = m.sink().transforms.last().unwrap();
    assert!(css.contains("matrix3d("), "{css}");
}

#[test]
fn warp_pipeline_sees_accumulated_quads() {
    let mut m = element(Options::default().warpable(true));
    let seen: Rc<RefCell<Vec<WarpDrag>>> = Rc::default();
    let sink = seen.clone();
    m.pipelines_mut().warping.push(move |w| {
        sink.borrow_mut().push(w);
        Some(w)
    });
    drag(
        &mut m,
        Handle::Anchor(Side::TopRight),
        &[(110.0, 20.0), (115.0, 20.0), (120.0, 15.0)],
    );
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].source.top_right(), Point::new(100.0, 0.0));
    assert_eq!(seen[1].target.top_right(), Point::new(110.0, -5.0));
}

#[test]
fn resize_pipeline_can_clamp() {
    let mut m = element(Options::default());
    m.pipelines_mut().resizing.push(|d: AnchorDrag| {
        Some(AnchorDrag {
            to: Point::new(d.to.x.min(d.from.x + 5.0), d.to.y),
            ..d
        })
    });
    drag(
        &mut m,
        Handle::Anchor(Side::CenterRight),
        &[(110.0, 45.0), (150.0, 45.0)],
    );
    assert_eq!(m.size(), Size::new(105.0, 50.0));
}

#[test]
fn visibility_is_pushed_on_focus_and_option_changes() {
    let mut m = element(Options::default());
    assert_eq!(m.sink().visibility.last(), Some(&Visibility::HIDDEN));

    m.handle(&PointerInput::press(Point::new(50.0, 40.0), Some(Handle::Body)));
    m.handle(&PointerInput::release(Point::new(50.0, 40.0)));
    assert_eq!(
        m.sink().visibility.last(),
        Some(&Visibility {
            frame: true,
            anchors: true,
            rotation_handle: true
        })
    );

    m.update_options(OptionsPatch::default().rotatable(false).resizable(false));
    assert_eq!(
        m.sink().visibility.last(),
        Some(&Visibility {
            frame: true,
            anchors: false,
            rotation_handle: false
        })
    );

    m.update_options(OptionsPatch::default().interactive(false));
    assert_eq!(m.sink().visibility.last(), Some(&Visibility::HIDDEN));
}

#[test]
fn non_interactive_element_ignores_everything() {
    let mut m = element(Options::default().interactive(false));
    drag(&mut m, Handle::Body, &[(50.0, 40.0), (80.0, 40.0)]);
    drag(
        &mut m,
        Handle::Anchor(Side::BottomRight),
        &[(110.0, 70.0), (130.0, 80.0)],
    );
    assert!(!m.is_focused());
    assert_eq!(m.state().net_translation(), Vec2::ZERO);
    assert_eq!(m.size(), Size::new(100.0, 50.0));
}

#[test]
fn conflicting_options_resolve_by_precedence() {
    let m = element(Options::default().scalable(true).warpable(true));
    let o = m.options();
    assert!(o.warpable && !o.resizable && !o.scalable);
}

#[test]
fn hit_test_respects_visibility() {
    let mut m = element(Options::default());
    let corner = Point::new(11.0, 21.0);
    assert_eq!(m.hit_test(corner), Some(Handle::Body));
    m.set_focus(true);
    assert_eq!(m.hit_test(corner), Some(Handle::Anchor(Side::TopLeft)));
    assert_eq!(
        m.hit_test(Point::new(60.0, -5.0)),
        Some(Handle::RotationHandle)
    );
}

#[test]
fn replay_is_deterministic() {
    let script = |m: &mut Manipulator<Recorder>| {
        drag(m, Handle::Body, &[(50.0, 40.0), (55.0, 41.0), (57.0, 49.0)]);
        drag(
            m,
            Handle::Anchor(Side::BottomLeft),
            &[(10.0, 70.0), (2.0, 75.0)],
        );
        drag(m, Handle::RotationHandle, &[(60.0, -5.0), (90.0, 0.0)]);
    };
    let mut a = element(Options::default());
    let mut b = element(Options::default());
    script(&mut a);
    script(&mut b);
    assert_eq!(a.state(), b.state());
    assert_eq!(a.sink().transforms, b.sink().transforms);
}
