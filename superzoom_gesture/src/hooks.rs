// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use superzoom_transform::TransformSnapshot;

use crate::input::{PointerInput, TouchInput, WheelInput};

/// Application hooks consulted by the gesture recognizer.
///
/// The `validate_*` predicates run before any gesture state changes; returning
/// `false` vetoes the whole gesture. All methods have permissive defaults, and
/// `()` implements the trait with those defaults.
///
/// ```
/// use superzoom_gesture::{GestureHooks, PointerButton, PointerInput};
///
/// /// Only pan with the primary button.
/// struct PrimaryOnly;
///
/// impl GestureHooks for PrimaryOnly {
///     fn validate_mouse_pan(&mut self, input: &PointerInput) -> bool {
///         input.button == PointerButton::Primary
///     }
/// }
/// ```
pub trait GestureHooks {
    /// Whether a pointer-down may start a mouse pan.
    fn validate_mouse_pan(&mut self, _input: &PointerInput) -> bool {
        true
    }

    /// Whether a wheel event may zoom, rotate or scroll.
    fn validate_mouse_wheel(&mut self, _input: &WheelInput) -> bool {
        true
    }

    /// Whether a touch-start may begin a touch gesture.
    fn validate_touch_pan(&mut self, _input: &TouchInput<'_>) -> bool {
        true
    }

    /// Called once when the last finger lifts, before rotation snapping.
    ///
    /// `last_centroid` is the last tracked touch position (the midpoint of
    /// the first two fingers for multi-touch gestures).
    fn on_touch_pan_complete(&mut self, _snapshot: &TransformSnapshot, _last_centroid: Point) {}
}

impl GestureHooks for () {}
