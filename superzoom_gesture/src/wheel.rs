// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and trackpad dispatch.

use kurbo::Vec2;
use superzoom_transform::{Renderer, TransformObserver, TransformState, WheelBehavior};

use crate::hooks::GestureHooks;
use crate::input::{EventOutcome, Modifiers, WheelInput};

/// Modifier that turns scroll-mode wheel events into zoom and rotation.
///
/// Browsers and most trackpad drivers report a pinch as a wheel event with
/// Control held.
pub const PRECISE_ZOOM_MODIFIER: Modifiers = Modifiers::CONTROL;

/// Zoom multiplier for one wheel delta.
///
/// The step is proportional to the delta and saturates at a quarter:
/// positive deltas zoom out to at least `0.75`, negative deltas zoom in to at
/// most `1.25`. A zero delta yields `1.0`.
///
/// ```
/// use superzoom_gesture::scale_multiplier;
///
/// assert_eq!(scale_multiplier(16.0), 0.875);
/// assert_eq!(scale_multiplier(128.0), 0.75);
/// assert_eq!(scale_multiplier(-64.0), 1.25);
/// assert_eq!(scale_multiplier(0.0), 1.0);
/// ```
#[must_use]
pub fn scale_multiplier(delta: f64) -> f64 {
    if delta == 0.0 || delta.is_nan() {
        return 1.0;
    }
    let sign = if delta > 0.0 { 1.0 } else { -1.0 };
    let speed = (delta.abs() / 128.0).min(0.25);
    (1.0 - sign * speed).abs()
}

/// Applies one wheel event to `state`.
pub(crate) fn handle_wheel<R, O, H>(
    state: &mut TransformState<R, O>,
    hooks: &mut H,
    input: &WheelInput,
) -> EventOutcome
where
    R: Renderer,
    O: TransformObserver,
    H: GestureHooks,
{
    if !hooks.validate_mouse_wheel(input) {
        tracing::trace!("wheel vetoed");
        return EventOutcome::Continue;
    }
    let options = *state.options();
    let direction = if options.inverted_zoom { -1.0 } else { 1.0 };
    let pointer = Some(input.position);

    match options.wheel_behavior {
        WheelBehavior::Zoom => {
            let dy = input.delta.y;
            if dy != 0.0 {
                let sign = if dy > 0.0 { direction } else { -direction };
                state.zoom_by_multiplier(scale_multiplier(sign * options.zoom_step), pointer);
            }
        }
        WheelBehavior::Scroll if input.modifiers.contains(PRECISE_ZOOM_MODIFIER) => {
            if input.delta.y != 0.0 {
                state.zoom_by_multiplier(scale_multiplier(direction * input.delta.y), pointer);
            }
            if input.delta.x != 0.0 {
                state.rotate_by(input.delta.x * options.wheel_rotate_speed, pointer);
            }
        }
        WheelBehavior::Scroll => {
            state.move_by(Vec2::new(-input.delta.x, -input.delta.y));
        }
    }
    EventOutcome::Consumed
}
