// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;
use superzoom_transform::{
    OptionsError, Renderer, TransformObserver, TransformSnapshot, TransformState, ZoomOptions,
};

use crate::hooks::GestureHooks;
use crate::host::{InputHost, SubscriptionId};
use crate::input::{EventOutcome, InputEvent, InputKind, PointerInput, TouchInput, WheelInput};
use crate::recognizer::GestureRecognizer;

/// A pan/zoom/rotate widget: transform state, gesture recognizer, hooks and
/// host subscriptions in one place.
///
/// The observer passed to [`SuperZoom::with_hooks`] only ever sees an
/// `&ElementTransform`, so it cannot call back into the widget while a
/// commit is in progress.
#[derive(Debug)]
pub struct SuperZoom<R, H = (), O = ()> {
    state: TransformState<R, O>,
    hooks: H,
    recognizer: GestureRecognizer,
    subscriptions: SmallVec<[SubscriptionId; 7]>,
}

impl<R: Renderer> SuperZoom<R> {
    /// Creates a widget with default hooks and no observer.
    pub fn new(renderer: R, options: ZoomOptions) -> Result<Self, OptionsError> {
        Self::with_hooks(renderer, options, (), ())
    }
}

impl<R, H, O> SuperZoom<R, H, O>
where
    R: Renderer,
    H: GestureHooks,
    O: TransformObserver,
{
    /// Creates a widget with gesture hooks and a commit observer.
    ///
    /// The widget starts detached; call [`SuperZoom::attach`] to receive
    /// events from a host.
    pub fn with_hooks(renderer: R, options: ZoomOptions, hooks: H, observer: O) -> Result<Self, OptionsError> {
        Ok(Self {
            state: TransformState::with_observer(renderer, options, observer)?,
            hooks,
            recognizer: GestureRecognizer::new(),
            subscriptions: SmallVec::new(),
        })
    }

    /// Subscribes to every [`InputKind`] on `host`.
    ///
    /// Does nothing if already attached.
    pub fn attach<I: InputHost>(&mut self, host: &mut I) {
        if self.is_attached() {
            return;
        }
        self.subscriptions
            .extend(InputKind::ALL.into_iter().map(|kind| host.subscribe(kind)));
        tracing::debug!(count = self.subscriptions.len(), "attached to host");
    }

    /// Unsubscribes everything and abandons any gesture in progress.
    ///
    /// Safe to call repeatedly; later calls do nothing. The transform is
    /// left as it is.
    pub fn destroy<I: InputHost>(&mut self, host: &mut I) {
        if self.subscriptions.is_empty() {
            return;
        }
        for id in self.subscriptions.drain(..) {
            host.unsubscribe(id);
        }
        self.recognizer.reset();
        tracing::debug!("detached from host");
    }

    /// Returns `true` while subscribed to a host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Feeds one host event.
    pub fn handle(&mut self, event: &InputEvent<'_>) -> EventOutcome {
        self.recognizer.handle(&mut self.state, &mut self.hooks, event)
    }

    /// Feeds a pointer-down.
    pub fn pointer_down(&mut self, input: PointerInput) -> EventOutcome {
        self.handle(&InputEvent::PointerDown(input))
    }

    /// Feeds a pointer-move.
    pub fn pointer_move(&mut self, input: PointerInput) -> EventOutcome {
        self.handle(&InputEvent::PointerMove(input))
    }

    /// Feeds a pointer-up.
    pub fn pointer_up(&mut self, input: PointerInput) -> EventOutcome {
        self.handle(&InputEvent::PointerUp(input))
    }

    /// Feeds a wheel event.
    pub fn wheel(&mut self, input: WheelInput) -> EventOutcome {
        self.handle(&InputEvent::Wheel(input))
    }

    /// Feeds a touch-start.
    pub fn touch_start(&mut self, input: TouchInput<'_>) -> EventOutcome {
        self.handle(&InputEvent::TouchStart(input))
    }

    /// Feeds a touch-move.
    pub fn touch_move(&mut self, input: TouchInput<'_>) -> EventOutcome {
        self.handle(&InputEvent::TouchMove(input))
    }

    /// Feeds a touch-end carrying the remaining touches.
    pub fn touch_end(&mut self, input: TouchInput<'_>) -> EventOutcome {
        self.handle(&InputEvent::TouchEnd(input))
    }

    /// Current transform snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        self.state.snapshot()
    }

    /// Resets rotation and centers the element in the viewport.
    pub fn recenter(&mut self) {
        self.state.recenter();
    }

    /// The transform state.
    #[must_use]
    pub fn transform(&self) -> &TransformState<R, O> {
        &self.state
    }

    /// The transform state, for programmatic moves, zooms and rotations.
    pub fn transform_mut(&mut self) -> &mut TransformState<R, O> {
        &mut self.state
    }

    /// The gesture hooks.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The gesture hooks, mutably.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// The gesture recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }
}
