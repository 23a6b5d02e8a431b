// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch pan, pinch and twist state machine.
//!
//! One finger pans. Two or more fingers pan by their midpoint, zoom by the
//! change in their distance and rotate by the change in the angle of the line
//! between them; only the first two touches are considered.
//!
//! Each move is applied relative to the previous sample, so the element
//! follows the fingers incrementally. A sample whose finger count does not
//! match the current phase only re-seeds the tracker; this avoids a jump when
//! a finger joins or leaves mid-gesture.

use kurbo::Point;
use superzoom_transform::{Renderer, TransformObserver, TransformState, wrap_radians_delta};

use crate::hooks::GestureHooks;
use crate::input::{EventOutcome, TouchInput};

/// Geometry of one touch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchFrame {
    /// A single finger.
    Single {
        /// Finger position.
        centroid: Point,
    },
    /// Two or more fingers, reduced to the first two.
    Pair {
        /// Midpoint of the two fingers.
        centroid: Point,
        /// Distance between the fingers.
        span: f64,
        /// Angle of the line from the second finger to the first, in radians.
        twist: f64,
    },
}

impl TouchFrame {
    /// Reduces a touch list to a frame, or `None` if it is empty.
    #[must_use]
    pub fn from_touches(touches: &[Point]) -> Option<Self> {
        match *touches {
            [] => None,
            [centroid] => Some(Self::Single { centroid }),
            [a, b, ..] => {
                let line = a - b;
                Some(Self::Pair {
                    centroid: a.midpoint(b),
                    span: line.hypot(),
                    twist: line.atan2(),
                })
            }
        }
    }

    /// The tracked position.
    #[must_use]
    pub fn centroid(&self) -> Point {
        match *self {
            Self::Single { centroid } | Self::Pair { centroid, .. } => centroid,
        }
    }
}

/// Where the touch machine is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TouchPhase {
    /// No fingers down (or the gesture was vetoed).
    #[default]
    Idle,
    /// One finger panning.
    Panning {
        /// Last finger position.
        centroid: Point,
    },
    /// Two or more fingers pinching and twisting.
    PinchRotating {
        /// Last midpoint of the first two fingers.
        centroid: Point,
        /// Last distance between them.
        span: f64,
        /// Last angle of the line between them, in radians.
        twist: f64,
    },
}

impl From<TouchFrame> for TouchPhase {
    fn from(frame: TouchFrame) -> Self {
        match frame {
            TouchFrame::Single { centroid } => Self::Panning { centroid },
            TouchFrame::Pair {
                centroid,
                span,
                twist,
            } => Self::PinchRotating {
                centroid,
                span,
                twist,
            },
        }
    }
}

impl TouchPhase {
    fn from_touches(touches: &[Point]) -> Self {
        TouchFrame::from_touches(touches).map_or(Self::Idle, Self::from)
    }

    fn centroid(&self) -> Option<Point> {
        match *self {
            Self::Idle => None,
            Self::Panning { centroid } | Self::PinchRotating { centroid, .. } => Some(centroid),
        }
    }
}

/// Tracks a touch gesture across touch events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchGesture {
    phase: TouchPhase,
}

impl TouchGesture {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// Returns `true` while any touch gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != TouchPhase::Idle
    }

    /// Starts (or re-seeds) the gesture from the current touches.
    ///
    /// The hooks are only consulted when starting from idle. A veto leaves
    /// the machine idle and the event unconsumed.
    pub fn touch_start<H: GestureHooks>(&mut self, hooks: &mut H, input: &TouchInput<'_>) -> EventOutcome {
        if self.phase == TouchPhase::Idle && !hooks.validate_touch_pan(input) {
            tracing::debug!("touch gesture vetoed");
            return EventOutcome::Continue;
        }
        self.phase = TouchPhase::from_touches(input.touches);
        tracing::debug!(touches = input.touches.len(), "touch gesture seeded");
        EventOutcome::Consumed
    }

    /// Applies finger motion since the previous sample.
    pub fn touch_move<R, O>(&mut self, state: &mut TransformState<R, O>, input: &TouchInput<'_>) -> EventOutcome
    where
        R: Renderer,
        O: TransformObserver,
    {
        let Some(frame) = TouchFrame::from_touches(input.touches) else {
            return EventOutcome::Continue;
        };
        match (self.phase, frame) {
            (TouchPhase::Idle, _) => return EventOutcome::Continue,
            (TouchPhase::Panning { centroid: last }, TouchFrame::Single { centroid }) => {
                state.move_by(centroid - last);
            }
            (
                TouchPhase::PinchRotating {
                    centroid: last_centroid,
                    span: last_span,
                    twist: last_twist,
                },
                TouchFrame::Pair {
                    centroid,
                    span,
                    twist,
                },
            ) => {
                state.move_by(centroid - last_centroid);
                if last_span > 0.0 {
                    state.zoom_by_multiplier(1.0 + (span / last_span - 1.0), Some(centroid));
                }
                let turn = wrap_radians_delta(twist - last_twist);
                state.rotate_by(turn.to_degrees(), Some(centroid));
            }
            _ => {
                tracing::debug!(touches = input.touches.len(), "finger count changed; re-seeding");
            }
        }
        self.phase = frame.into();
        EventOutcome::Consumed
    }

    /// Handles a lifted finger; `input` carries the remaining touches.
    ///
    /// With fingers remaining the tracker re-seeds from them. When the last
    /// finger lifts the gesture completes: the hooks hear about it, then the
    /// rotation snaps if snapping is enabled and a target is within tolerance.
    pub fn touch_end<R, O, H>(
        &mut self,
        state: &mut TransformState<R, O>,
        hooks: &mut H,
        input: &TouchInput<'_>,
    ) -> EventOutcome
    where
        R: Renderer,
        O: TransformObserver,
        H: GestureHooks,
    {
        let Some(last_centroid) = self.phase.centroid() else {
            return EventOutcome::Continue;
        };
        if !input.touches.is_empty() {
            self.phase = TouchPhase::from_touches(input.touches);
            return EventOutcome::Continue;
        }

        self.phase = TouchPhase::Idle;
        tracing::debug!("touch gesture completed");
        hooks.on_touch_pan_complete(&state.snapshot(), last_centroid);

        if let Some(policy) = state.options().snap_policy() {
            let angle = state.angle();
            if let Some(target) = policy.closest(angle)
                && target != angle
            {
                tracing::debug!(from = angle, to = target, "snapping rotation");
                state.rotate_to(target, None);
            }
        }
        EventOutcome::Continue
    }

    /// Drops any gesture in progress without touching the state.
    pub fn cancel(&mut self) {
        self.phase = TouchPhase::Idle;
    }
}
