// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse pan state machine.
//!
//! ## Usage
//!
//! 1) On pointer-down call [`MouseGesture::pointer_down`]; if the hooks accept
//!    the event the gesture starts panning from that position.
//! 2) On each pointer-move call [`MouseGesture::pointer_move`]; while panning
//!    this moves the element by the delta since the last position.
//! 3) On pointer-up call [`MouseGesture::pointer_up`] to return to idle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use superzoom_gesture::{MouseGesture, PointerInput};
//! use superzoom_transform::{ReferenceRenderer, TransformState, ZoomOptions};
//!
//! let renderer = ReferenceRenderer::new(Rect::new(0.0, 0.0, 100.0, 100.0), Size::new(800.0, 600.0));
//! let mut state = TransformState::new(renderer, ZoomOptions::default()).unwrap();
//! let mut mouse = MouseGesture::default();
//!
//! assert!(mouse.pointer_down(&mut (), &PointerInput::new(Point::new(10.0, 20.0))));
//! mouse.pointer_move(&mut state, &PointerInput::new(Point::new(15.0, 25.0)));
//! assert_eq!(state.translation(), Vec2::new(5.0, 5.0));
//!
//! mouse.pointer_up();
//! mouse.pointer_move(&mut state, &PointerInput::new(Point::new(50.0, 50.0)));
//! assert_eq!(state.translation(), Vec2::new(5.0, 5.0));
//! ```

use kurbo::Point;
use superzoom_transform::{Renderer, TransformObserver, TransformState};

use crate::hooks::GestureHooks;
use crate::input::PointerInput;

/// Where the mouse pan machine is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MousePhase {
    /// No button held (or the press was vetoed).
    #[default]
    Idle,
    /// Dragging the element.
    Panning {
        /// Last recorded pointer position.
        last: Point,
    },
}

/// Tracks a mouse pan across pointer events.
#[derive(Clone, Copy, Debug, Default)]
pub struct MouseGesture {
    phase: MousePhase,
}

impl MouseGesture {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MousePhase {
        self.phase
    }

    /// Returns `true` while panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, MousePhase::Panning { .. })
    }

    /// Starts panning at the pointer position unless the hooks veto it.
    ///
    /// Returns whether panning started. A vetoed press leaves the machine
    /// untouched.
    pub fn pointer_down<H: GestureHooks>(&mut self, hooks: &mut H, input: &PointerInput) -> bool {
        if !hooks.validate_mouse_pan(input) {
            tracing::debug!("mouse pan vetoed");
            return false;
        }
        self.phase = MousePhase::Panning {
            last: input.position,
        };
        tracing::debug!(x = input.position.x, y = input.position.y, "mouse pan started");
        true
    }

    /// Moves the element by the pointer delta while panning.
    pub fn pointer_move<R, O>(&mut self, state: &mut TransformState<R, O>, input: &PointerInput)
    where
        R: Renderer,
        O: TransformObserver,
    {
        if let MousePhase::Panning { last } = self.phase {
            state.move_by(input.position - last);
            self.phase = MousePhase::Panning {
                last: input.position,
            };
        }
    }

    /// Ends the pan.
    pub fn pointer_up(&mut self) {
        if self.is_panning() {
            tracing::debug!("mouse pan ended");
        }
        self.phase = MousePhase::Idle;
    }
}
