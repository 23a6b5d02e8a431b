// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SuperZoom Gesture: turns pointer, wheel and touch input into pan, zoom and
//! rotation of a [`TransformState`](superzoom_transform::TransformState).
//!
//! This crate provides:
//! - Host-agnostic input samples ([`InputEvent`] and friends) and the
//!   [`EventOutcome`] telling the host whether to suppress an event.
//! - A mouse pan machine, wheel dispatch (zoom, scroll or trackpad pinch) and
//!   a touch machine for one-finger pan and two-finger pinch and twist.
//! - [`GestureHooks`] to veto gestures and hear when a touch gesture ends.
//! - [`SuperZoom`], a widget tying the state, recognizer, hooks and
//!   [`InputHost`] subscriptions together.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use superzoom_gesture::{EventOutcome, SuperZoom, TouchInput};
//! use superzoom_transform::{ReferenceRenderer, ZoomOptions};
//!
//! let renderer = ReferenceRenderer::new(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Size::new(800.0, 600.0),
//! );
//! let options = ZoomOptions::default()
//!     .with_zoom_limits(0.5, 4.0)
//!     .with_snap_rotation(90.0, 10.0);
//! let mut widget = SuperZoom::new(renderer, options).unwrap();
//!
//! // Two fingers spread apart and twist by 85 degrees about their midpoint.
//! let start = [Point::new(60.0, 50.0), Point::new(40.0, 50.0)];
//! assert_eq!(widget.touch_start(TouchInput::new(&start)), EventOutcome::Consumed);
//! let turned = kurbo::Vec2::from_angle(85_f64.to_radians()) * 20.0;
//! let moved = [Point::new(50.0, 50.0) + turned, Point::new(50.0, 50.0) - turned];
//! widget.touch_move(TouchInput::new(&moved));
//! assert!((widget.snapshot().scale - 2.0).abs() < 1e-9);
//!
//! // Lifting the fingers snaps 85 degrees to the nearest quarter turn.
//! widget.touch_end(TouchInput::new(&[]));
//! assert_eq!(widget.snapshot().angle, 90.0);
//! ```
//!
//! ## Hosts
//!
//! A host implements [`InputHost`]. [`SuperZoom::attach`] subscribes to every
//! [`InputKind`]; the host then forwards matching events to
//! [`SuperZoom::handle`] and suppresses the ones reported as
//! [`EventOutcome::Consumed`]. [`SuperZoom::destroy`] unsubscribes again.
//!
//! This crate is `no_std`.

#![no_std]

mod hooks;
mod host;
mod input;
mod mouse;
mod recognizer;
mod touch;
mod wheel;
mod widget;

pub use hooks::GestureHooks;
pub use host::{InputHost, SubscriptionId};
pub use input::{
    EventOutcome, InputEvent, InputKind, Modifiers, PointerButton, PointerInput, TouchInput,
    WheelInput,
};
pub use mouse::{MouseGesture, MousePhase};
pub use recognizer::GestureRecognizer;
pub use touch::{TouchFrame, TouchGesture, TouchPhase};
pub use wheel::{PRECISE_ZOOM_MODIFIER, scale_multiplier};
pub use widget::SuperZoom;
