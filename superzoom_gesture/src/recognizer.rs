// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use superzoom_transform::{Renderer, TransformObserver, TransformState};

use crate::hooks::GestureHooks;
use crate::input::{EventOutcome, InputEvent};
use crate::mouse::MouseGesture;
use crate::touch::TouchGesture;
use crate::wheel::handle_wheel;

/// Routes host events to the mouse and touch machines and the wheel handler.
///
/// The recognizer owns no transform; each call borrows the state it drives.
/// Mouse and touch gestures are tracked independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureRecognizer {
    mouse: MouseGesture,
    touch: TouchGesture,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one event and reports whether the host should suppress it.
    pub fn handle<R, O, H>(
        &mut self,
        state: &mut TransformState<R, O>,
        hooks: &mut H,
        event: &InputEvent<'_>,
    ) -> EventOutcome
    where
        R: Renderer,
        O: TransformObserver,
        H: GestureHooks,
    {
        match event {
            InputEvent::PointerDown(input) => {
                self.mouse.pointer_down(hooks, input);
                EventOutcome::Continue
            }
            InputEvent::PointerMove(input) => {
                self.mouse.pointer_move(state, input);
                EventOutcome::Continue
            }
            InputEvent::PointerUp(_) => {
                self.mouse.pointer_up();
                EventOutcome::Continue
            }
            InputEvent::Wheel(input) => handle_wheel(state, hooks, input),
            InputEvent::TouchStart(input) => self.touch.touch_start(hooks, input),
            InputEvent::TouchMove(input) => self.touch.touch_move(state, input),
            InputEvent::TouchEnd(input) => self.touch.touch_end(state, hooks, input),
        }
    }

    /// Abandons any gesture in progress.
    pub fn reset(&mut self) {
        self.mouse.pointer_up();
        self.touch.cancel();
    }

    /// The mouse machine.
    #[must_use]
    pub fn mouse(&self) -> &MouseGesture {
        &self.mouse
    }

    /// The touch machine.
    #[must_use]
    pub fn touch(&self) -> &TouchGesture {
        &self.touch
    }
}
