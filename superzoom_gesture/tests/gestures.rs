// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `superzoom_gesture`.
//!
//! These drive a [`SuperZoom`] widget over the headless reference renderer
//! with event streams as a host would deliver them, and check both the
//! resulting transform and what the hooks and host observed.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};
use superzoom_gesture::{
    EventOutcome, GestureHooks, InputEvent, InputHost, InputKind, Modifiers, PointerButton,
    PointerInput, SubscriptionId, SuperZoom, TouchInput, WheelInput,
};
use superzoom_transform::{
    ElementTransform, ReferenceRenderer, TransformSnapshot, WheelBehavior, ZoomOptions,
};

const EPS: f64 = 1e-6;

fn renderer() -> ReferenceRenderer {
    ReferenceRenderer::new(Rect::new(0.0, 0.0, 100.0, 100.0), Size::new(800.0, 600.0))
}

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < EPS, "{a:?} != {b:?}");
}

/// Two touches `radius` away from `center` on either side, along `degrees`.
fn pair(center: Point, radius: f64, degrees: f64) -> [Point; 2] {
    let arm = Vec2::from_angle(degrees.to_radians()) * radius;
    [center + arm, center - arm]
}

#[derive(Default)]
struct Recorder {
    block_secondary: bool,
    block_wheel: bool,
    block_touch: bool,
    completions: Vec<(TransformSnapshot, Point)>,
}

impl GestureHooks for Recorder {
    fn validate_mouse_pan(&mut self, input: &PointerInput) -> bool {
        !(self.block_secondary && input.button == PointerButton::Secondary)
    }

    fn validate_mouse_wheel(&mut self, _input: &WheelInput) -> bool {
        !self.block_wheel
    }

    fn validate_touch_pan(&mut self, _input: &TouchInput<'_>) -> bool {
        !self.block_touch
    }

    fn on_touch_pan_complete(&mut self, snapshot: &TransformSnapshot, last_centroid: Point) {
        self.completions.push((*snapshot, last_centroid));
    }
}

fn recorded(options: ZoomOptions, hooks: Recorder) -> SuperZoom<ReferenceRenderer, Recorder> {
    SuperZoom::with_hooks(renderer(), options, hooks, ()).unwrap()
}

#[derive(Default)]
struct RecordingHost {
    next: u64,
    live: Vec<(SubscriptionId, InputKind)>,
    unsubscribed: Vec<SubscriptionId>,
}

impl InputHost for RecordingHost {
    fn subscribe(&mut self, kind: InputKind) -> SubscriptionId {
        self.next += 1;
        let id = SubscriptionId(self.next);
        self.live.push((id, kind));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.unsubscribed.push(id);
        self.live.retain(|(live, _)| *live != id);
    }
}

#[test]
fn mouse_drag_pans_and_is_never_consumed() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default()).unwrap();
    let stream = [
        InputEvent::PointerDown(PointerInput::new(Point::new(10.0, 10.0))),
        InputEvent::PointerMove(PointerInput::new(Point::new(20.0, 15.0))),
        InputEvent::PointerMove(PointerInput::new(Point::new(30.0, 5.0))),
        InputEvent::PointerUp(PointerInput::new(Point::new(30.0, 5.0))),
        InputEvent::PointerMove(PointerInput::new(Point::new(90.0, 90.0))),
    ];
    for event in &stream {
        assert_eq!(w.handle(event), EventOutcome::Continue);
    }
    let snap = w.snapshot();
    assert_eq!((snap.x, snap.y), (20.0, -5.0));
}

#[test]
fn vetoed_mouse_pan_ignores_moves() {
    let hooks = Recorder {
        block_secondary: true,
        ..Recorder::default()
    };
    let mut w = recorded(ZoomOptions::default(), hooks);
    let press = PointerInput::new(Point::new(10.0, 10.0)).with_button(PointerButton::Secondary);
    w.pointer_down(press);
    w.pointer_move(PointerInput::new(Point::new(60.0, 60.0)));
    assert_eq!(w.transform().translation(), Vec2::ZERO);
    assert_eq!(w.transform().renderer().commits(), 1);
}

#[test]
fn wheel_zoom_keeps_material_under_pointer() {
    let options = ZoomOptions::default()
        .with_zoom_limits(0.25, 8.0)
        .with_wheel_behavior(WheelBehavior::Zoom);
    let mut w = SuperZoom::new(renderer(), options).unwrap();
    let pointer = Point::new(20.0, 30.0);
    let fraction = w.transform().renderer().fraction_at_point(pointer);

    for dy in [-1.0, -1.0, -1.0, 2.0] {
        let out = w.wheel(WheelInput::new(pointer, Vec2::new(0.0, dy)));
        assert_eq!(out, EventOutcome::Consumed);
    }
    let up = 1.0 + 10.0 / 128.0;
    let down = 1.0 - 10.0 / 128.0;
    assert!((w.snapshot().scale - up * up * up * down).abs() < 1e-12);
    assert_close(w.transform().renderer().point_at_fraction(fraction), pointer);
}

#[test]
fn wheel_zoom_stops_at_bounds() {
    let options = ZoomOptions::default()
        .with_zoom_limits(1.0, 1.5)
        .with_wheel_behavior(WheelBehavior::Zoom);
    let mut w = SuperZoom::new(renderer(), options).unwrap();
    for _ in 0..20 {
        w.wheel(WheelInput::new(Point::new(50.0, 50.0), Vec2::new(0.0, -120.0)));
    }
    assert_eq!(w.snapshot().scale, 1.5);
    for _ in 0..20 {
        w.wheel(WheelInput::new(Point::new(50.0, 50.0), Vec2::new(0.0, 120.0)));
    }
    assert_eq!(w.snapshot().scale, 1.0);
}

#[test]
fn wheel_scroll_pans_and_trackpad_pinch_zooms() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default().with_zoom_limits(0.5, 4.0))
        .unwrap();
    w.wheel(WheelInput::new(Point::ORIGIN, Vec2::new(-4.0, 12.0)));
    assert_eq!(w.transform().translation(), Vec2::new(4.0, -12.0));

    let pointer = Point::new(40.0, 40.0);
    let fraction = w.transform().renderer().fraction_at_point(pointer);
    let pinch = WheelInput::new(pointer, Vec2::new(0.0, -32.0)).with_modifiers(Modifiers::CONTROL);
    assert_eq!(w.wheel(pinch), EventOutcome::Consumed);
    assert_eq!(w.snapshot().scale, 1.25);
    assert_close(w.transform().renderer().point_at_fraction(fraction), pointer);
}

#[test]
fn trackpad_rotation_turns_about_pointer() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default().with_wheel_rotate_speed(0.5))
        .unwrap();
    let pointer = Point::new(75.0, 20.0);
    let fraction = w.transform().renderer().fraction_at_point(pointer);
    let twist = WheelInput::new(pointer, Vec2::new(60.0, 0.0)).with_modifiers(Modifiers::CONTROL);
    w.wheel(twist);
    assert!((w.snapshot().angle - 30.0).abs() < 1e-9);
    assert_close(w.transform().renderer().point_at_fraction(fraction), pointer);
}

#[test]
fn vetoed_wheel_is_left_to_the_host() {
    let hooks = Recorder {
        block_wheel: true,
        ..Recorder::default()
    };
    let mut w = recorded(ZoomOptions::default(), hooks);
    let out = w.wheel(WheelInput::new(Point::ORIGIN, Vec2::new(0.0, 50.0)));
    assert_eq!(out, EventOutcome::Continue);
    assert_eq!(w.transform().translation(), Vec2::ZERO);
}

#[test]
fn pinch_and_twist_hold_material_under_centroid() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default().with_zoom_limits(0.5, 4.0))
        .unwrap();
    let center = Point::new(30.0, 60.0);
    let fraction = w.transform().renderer().fraction_at_point(center);

    let start = pair(center, 10.0, 0.0);
    assert_eq!(w.touch_start(TouchInput::new(&start)), EventOutcome::Consumed);
    let mid = pair(center, 15.0, 20.0);
    assert_eq!(w.touch_move(TouchInput::new(&mid)), EventOutcome::Consumed);
    let end = pair(center, 20.0, 50.0);
    w.touch_move(TouchInput::new(&end));

    let snap = w.snapshot();
    assert!((snap.scale - 2.0).abs() < 1e-9);
    assert!((snap.angle - 50.0).abs() < 1e-9);
    assert_close(w.transform().renderer().point_at_fraction(fraction), center);
}

#[test]
fn two_finger_drag_pans_by_centroid() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default()).unwrap();
    let start = pair(Point::new(50.0, 50.0), 10.0, 0.0);
    w.touch_start(TouchInput::new(&start));
    let moved = pair(Point::new(65.0, 40.0), 10.0, 0.0);
    w.touch_move(TouchInput::new(&moved));
    assert_close(w.transform().translation().to_point(), Point::new(15.0, -10.0));
    assert_eq!(w.snapshot().scale, 1.0);
}

#[test]
fn adding_and_lifting_fingers_never_jumps() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default()).unwrap();
    let one = [Point::new(10.0, 10.0)];
    w.touch_start(TouchInput::new(&one));
    w.touch_move(TouchInput::new(&[Point::new(15.0, 10.0)]));
    assert_eq!(w.transform().translation(), Vec2::new(5.0, 0.0));

    // A second finger lands far away: re-seed, no motion.
    let two = [Point::new(15.0, 10.0), Point::new(95.0, 90.0)];
    w.touch_start(TouchInput::new(&two));
    w.touch_move(TouchInput::new(&two));
    assert_close(w.transform().translation().to_point(), Point::new(5.0, 0.0));

    // The first finger lifts: re-seed from the survivor, then pan with it.
    let survivor = [Point::new(95.0, 90.0)];
    assert_eq!(w.touch_end(TouchInput::new(&survivor)), EventOutcome::Continue);
    w.touch_move(TouchInput::new(&[Point::new(97.0, 91.0)]));
    assert_close(w.transform().translation().to_point(), Point::new(7.0, 1.0));
}

#[test]
fn vetoed_touch_is_left_to_the_host() {
    let hooks = Recorder {
        block_touch: true,
        ..Recorder::default()
    };
    let mut w = recorded(ZoomOptions::default(), hooks);
    let touches = [Point::new(1.0, 1.0)];
    assert_eq!(w.touch_start(TouchInput::new(&touches)), EventOutcome::Continue);
    assert_eq!(
        w.touch_move(TouchInput::new(&[Point::new(9.0, 9.0)])),
        EventOutcome::Continue
    );
    w.touch_end(TouchInput::new(&[]));
    assert_eq!(w.transform().translation(), Vec2::ZERO);
    assert!(w.hooks().completions.is_empty());
}

#[test]
fn completion_hook_fires_once_then_rotation_snaps() {
    let options = ZoomOptions::default().with_snap_rotation(90.0, 10.0);
    let mut w = recorded(options, Recorder::default());
    let center = Point::new(50.0, 50.0);
    w.touch_start(TouchInput::new(&pair(center, 10.0, 0.0)));
    let turned = pair(center, 10.0, 83.0);
    w.touch_move(TouchInput::new(&turned));

    // One finger lifts: no completion yet.
    w.touch_end(TouchInput::new(&turned[1..]));
    assert!(w.hooks().completions.is_empty());

    w.touch_end(TouchInput::new(&[]));
    let completions = &w.hooks().completions;
    assert_eq!(completions.len(), 1);
    let (snapshot, centroid) = completions[0];
    assert!((snapshot.angle - 83.0).abs() < 1e-9, "hook saw {}", snapshot.angle);
    assert_eq!(centroid, turned[1]);

    assert_eq!(w.snapshot().angle, 90.0);
    assert_eq!(w.snapshot().pivot, Point::new(0.5, 0.5));
}

#[test]
fn rotation_outside_tolerance_does_not_snap() {
    let options = ZoomOptions::default().with_snap_rotation(90.0, 10.0);
    let mut w = SuperZoom::new(renderer(), options).unwrap();
    let center = Point::new(50.0, 50.0);
    w.touch_start(TouchInput::new(&pair(center, 10.0, 0.0)));
    w.touch_move(TouchInput::new(&pair(center, 10.0, 45.0)));
    w.touch_end(TouchInput::new(&[]));
    assert!((w.snapshot().angle - 45.0).abs() < 1e-9);
}

#[test]
fn snapping_disabled_keeps_angle() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default()).unwrap();
    let center = Point::new(50.0, 50.0);
    w.touch_start(TouchInput::new(&pair(center, 10.0, 0.0)));
    w.touch_move(TouchInput::new(&pair(center, 10.0, 88.0)));
    w.touch_end(TouchInput::new(&[]));
    assert!((w.snapshot().angle - 88.0).abs() < 1e-9);
}

#[test]
fn observer_sees_every_commit() {
    let seen: Rc<RefCell<Vec<ElementTransform>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let observer = move |t: &ElementTransform| sink.borrow_mut().push(*t);
    let mut w = SuperZoom::with_hooks(renderer(), ZoomOptions::default(), (), observer).unwrap();

    w.pointer_down(PointerInput::new(Point::ORIGIN));
    w.pointer_move(PointerInput::new(Point::new(3.0, 4.0)));
    w.recenter();

    let seen = seen.borrow();
    // Construction, one pan, and the rotate-then-move of recenter.
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[1].translation, Vec2::new(3.0, 4.0));
    assert_eq!(seen.last().copied(), Some(w.transform().current_transform()));
}

#[test]
fn recenter_centers_in_viewport() {
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default().with_initial_angle(30.0))
        .unwrap();
    w.transform_mut().zoom_to(2.0, None);
    w.recenter();
    let snap = w.snapshot();
    assert_eq!(snap.angle, 0.0);
    assert_close(Point::new(snap.x, snap.y), Point::new(300.0, 200.0));
}

#[test]
fn destroy_twice_leaves_no_subscriptions() {
    let mut host = RecordingHost::default();
    let mut w = SuperZoom::new(renderer(), ZoomOptions::default()).unwrap();
    w.attach(&mut host);
    assert_eq!(host.live.len(), 7);

    w.destroy(&mut host);
    w.destroy(&mut host);
    assert!(host.live.is_empty());
    assert_eq!(host.unsubscribed.len(), 7);
    assert!(!w.is_attached());

    // A destroyed widget can be attached again.
    w.attach(&mut host);
    assert_eq!(host.live.len(), 7);
}
