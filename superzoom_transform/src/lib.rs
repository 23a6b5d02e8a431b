// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SuperZoom Transform: pan, zoom and rotation state for a directly
//! manipulated element.
//!
//! This crate models one element that the user drags, pinches and twists.
//! It keeps the element's translation, zoom and rotation and the pivot they
//! are composed about, and pushes every change to a [`Renderer`]. It focuses
//! on:
//! - Zooming about a screen point so that point stays under the cursor.
//! - Rotating about a screen point by relocating the pivot there first,
//!   compensating the translation from *measured* geometry so the element
//!   does not jump.
//! - Clamping zoom, single-turn angle wrapping and rotation snapping.
//!
//! It does **not** own the element or listen to input. Callers are expected
//! to:
//! - Implement [`Renderer`] for a handle to their element (or use
//!   [`ReferenceRenderer`] for headless use and tests).
//! - Feed pointer input through `superzoom_gesture`, or call the mutators on
//!   [`TransformState`] directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use superzoom_transform::{ReferenceRenderer, TransformState, ZoomOptions};
//!
//! // A 200x100 element at the top-left of an 800x600 viewport.
//! let renderer = ReferenceRenderer::new(
//!     Rect::new(0.0, 0.0, 200.0, 100.0),
//!     Size::new(800.0, 600.0),
//! );
//! let mut state = TransformState::new(renderer, ZoomOptions::default()).unwrap();
//!
//! // Zoom in about the element's top-left corner: the corner stays put.
//! state.zoom_to(2.0, Some(Point::new(0.0, 0.0)));
//! assert_eq!(state.translation(), kurbo::Vec2::ZERO);
//!
//! // Rotate about a point; the material under that point stays under it.
//! let grab = Point::new(300.0, 150.0);
//! let fraction = state.renderer().fraction_at_point(grab);
//! state.rotate_to(90.0, Some(grab));
//! let after = state.renderer().point_at_fraction(fraction);
//! assert!((after - grab).hypot() < 1e-9);
//! ```
//!
//! ## Observing commits
//!
//! Pass a [`TransformObserver`] (any `FnMut(&ElementTransform)` works) to
//! [`TransformState::with_observer`] to hear about every commit, for example
//! to write [`ElementTransform::css_transform`] into a style attribute.
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod observer;
mod options;
mod pivot;
mod reference;
mod render;
mod snap;
mod state;

pub use geometry::{Polar, wrap_degrees_once, wrap_radians_delta};
pub use observer::TransformObserver;
pub use options::{OptionsError, WheelBehavior, ZoomOptions};
pub use pivot::solve_pivot_fraction;
pub use reference::ReferenceRenderer;
pub use render::{CENTER_PIVOT, CssTransform, CssTransformOrigin, ElementTransform, Renderer};
pub use snap::SnapRotation;
pub use state::{TransformSnapshot, TransformState};
