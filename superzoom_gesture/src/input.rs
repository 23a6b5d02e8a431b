// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input samples as delivered by the host, in client-space coordinates.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Keyboard modifiers held while an input event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key. Trackpad pinches arrive as wheel events with this set.
        const CONTROL = 0b0000_0010;
        /// Alt / Option key.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META    = 0b0000_1000;
    }
}

/// Which mouse button a pointer event concerns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
    /// Any further button, by host index.
    Other(u16),
}

/// A mouse pointer down, move or up sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position.
    pub position: Point,
    /// Button that changed state (for moves, the host's reported button).
    pub button: PointerButton,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// A primary-button sample at `position` with no modifiers.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A wheel (or trackpad scroll/pinch) sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position when the wheel event fired.
    pub position: Point,
    /// Scroll delta; positive `y` scrolls down, positive `x` scrolls right.
    pub delta: Vec2,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl WheelInput {
    /// A wheel sample without modifiers.
    #[must_use]
    pub fn new(position: Point, delta: Vec2) -> Self {
        Self {
            position,
            delta,
            modifiers: Modifiers::empty(),
        }
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A multi-touch sample: every finger still on the surface.
///
/// For touch-end this is the set of *remaining* touches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput<'a> {
    /// Active touch positions, in host order.
    pub touches: &'a [Point],
}

impl<'a> TouchInput<'a> {
    /// Wraps the host's active touch list.
    #[must_use]
    pub fn new(touches: &'a [Point]) -> Self {
        Self { touches }
    }
}

/// The kinds of host event a widget subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Mouse button pressed.
    PointerDown,
    /// Mouse moved.
    PointerMove,
    /// Mouse button released.
    PointerUp,
    /// Wheel turned or trackpad scrolled.
    Wheel,
    /// A finger touched down.
    TouchStart,
    /// Fingers moved.
    TouchMove,
    /// A finger lifted.
    TouchEnd,
}

impl InputKind {
    /// Every kind, in subscription order.
    pub const ALL: [Self; 7] = [
        Self::PointerDown,
        Self::PointerMove,
        Self::PointerUp,
        Self::Wheel,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
    ];
}

/// One host event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Mouse button pressed.
    PointerDown(PointerInput),
    /// Mouse moved.
    PointerMove(PointerInput),
    /// Mouse button released.
    PointerUp(PointerInput),
    /// Wheel turned or trackpad scrolled.
    Wheel(WheelInput),
    /// A finger touched down; carries all active touches.
    TouchStart(TouchInput<'a>),
    /// Fingers moved; carries all active touches.
    TouchMove(TouchInput<'a>),
    /// A finger lifted; carries the remaining touches.
    TouchEnd(TouchInput<'a>),
}

impl InputEvent<'_> {
    /// The subscription kind this event is delivered under.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::PointerDown(_) => InputKind::PointerDown,
            Self::PointerMove(_) => InputKind::PointerMove,
            Self::PointerUp(_) => InputKind::PointerUp,
            Self::Wheel(_) => InputKind::Wheel,
            Self::TouchStart(_) => InputKind::TouchStart,
            Self::TouchMove(_) => InputKind::TouchMove,
            Self::TouchEnd(_) => InputKind::TouchEnd,
        }
    }
}

/// What the host should do with an event after the widget saw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EventOutcome {
    /// Let default handling and propagation proceed.
    #[default]
    Continue,
    /// Suppress default handling and stop propagation.
    Consumed,
}

impl EventOutcome {
    /// Returns `true` for [`EventOutcome::Consumed`].
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}
