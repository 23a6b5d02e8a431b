// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::geometry::wrap_degrees_once;
use crate::observer::TransformObserver;
use crate::options::{OptionsError, ZoomOptions};
use crate::pivot::solve_pivot_fraction;
use crate::render::{CENTER_PIVOT, ElementTransform, Renderer};

/// Translation, zoom, rotation and pivot of one directly manipulated element.
///
/// Every mutator finishes by committing: the full [`ElementTransform`] goes
/// to the renderer and then to the observer. Nothing here fails at runtime;
/// zoom requests are clamped into the configured bounds and omitted pivots
/// fall back to defaults.
///
/// Pivots passed to mutators are screen-space points. `None` selects the
/// default for the operation; `Some` is always honored, including points
/// with zero coordinates.
#[derive(Debug)]
pub struct TransformState<R, O = ()> {
    renderer: R,
    observer: O,
    options: ZoomOptions,
    translation: Vec2,
    zoom: f64,
    angle: f64,
    pivot: Point,
    base_size: Size,
}

impl<R: Renderer> TransformState<R> {
    /// Creates a state driving `renderer`, without an observer.
    ///
    /// See [`TransformState::with_observer`].
    pub fn new(renderer: R, options: ZoomOptions) -> Result<Self, OptionsError> {
        Self::with_observer(renderer, options, ())
    }
}

impl<R: Renderer, O: TransformObserver> TransformState<R, O> {
    /// Creates a state driving `renderer` and notifying `observer`.
    ///
    /// The element must be untransformed at this point: its measured size
    /// becomes the base size for the lifetime of the state. The initial
    /// translation, zoom (clamped) and angle (wrapped) from `options` are
    /// committed immediately with the pivot at the center.
    pub fn with_observer(renderer: R, options: ZoomOptions, observer: O) -> Result<Self, OptionsError> {
        options.validate()?;
        let base_size = renderer.measure().size();
        let mut state = Self {
            renderer,
            observer,
            options,
            translation: Vec2::new(options.initial_x, options.initial_y),
            zoom: options.initial_zoom.clamp(options.min_zoom, options.max_zoom),
            angle: wrap_degrees_once(options.initial_angle),
            pivot: CENTER_PIVOT,
            base_size,
        };
        state.commit();
        Ok(state)
    }

    /// Sets the translation.
    pub fn move_to(&mut self, translation: Vec2) {
        self.translation = translation;
        self.commit();
    }

    /// Offsets the translation.
    pub fn move_by(&mut self, delta: Vec2) {
        self.move_to(self.translation + delta);
    }

    /// Zooms to `zoom` (clamped) keeping `pivot` fixed on screen.
    ///
    /// Without a pivot the element's current visual center is used. The
    /// translation is scaled about the pivot by `new_zoom / old_zoom`. A NaN
    /// request leaves the zoom unchanged.
    pub fn zoom_to(&mut self, zoom: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.visual_center());
        let zoom = if zoom.is_nan() { self.zoom } else { zoom };
        let new_zoom = zoom.clamp(self.options.min_zoom, self.options.max_zoom);
        let factor = new_zoom / self.zoom;

        let anchor = pivot.to_vec2();
        self.translation = anchor - (anchor - self.translation) * factor;
        self.zoom = new_zoom;
        self.commit();
    }

    /// Zooms by adding `delta` to the current zoom.
    pub fn zoom_by(&mut self, delta: f64, pivot: Option<Point>) {
        self.zoom_to(self.zoom + delta, pivot);
    }

    /// Zooms by multiplying the current zoom by `multiplier`.
    pub fn zoom_by_multiplier(&mut self, multiplier: f64, pivot: Option<Point>) {
        self.zoom_to(self.zoom * multiplier, pivot);
    }

    /// Rotates to `angle` degrees about `pivot`.
    ///
    /// With a pivot, the rotation pivot is first relocated to the fraction of
    /// the element currently under that point, so the point stays put while
    /// the element turns around it. Without one the pivot moves to the
    /// element's center. The angle is then wrapped by a single turn into
    /// `[0, 360)` (see [`wrap_degrees_once`]) and committed.
    pub fn rotate_to(&mut self, angle: f64, pivot: Option<Point>) {
        let fraction = match pivot {
            Some(point) => solve_pivot_fraction(
                point,
                self.renderer.measure(),
                self.angle,
                self.zoom,
                self.base_size,
            ),
            None => CENTER_PIVOT,
        };
        self.relocate_pivot(fraction);
        self.angle = wrap_degrees_once(angle);
        self.commit();
    }

    /// Rotates by `delta` degrees about `pivot`.
    pub fn rotate_by(&mut self, delta: f64, pivot: Option<Point>) {
        self.rotate_to(self.angle + delta, pivot);
    }

    /// Moves the pivot to `fraction` of the untransformed box without moving
    /// the element on screen.
    pub fn set_pivot(&mut self, fraction: Point) {
        self.relocate_pivot(fraction);
        self.commit();
    }

    /// Resets the rotation and centers the element in the viewport.
    ///
    /// The rotation goes back to zero about the element's center; the element
    /// is then moved so its measured box sits in the middle of
    /// [`Renderer::viewport`]. For an element laid out at the viewport origin
    /// the resulting translation is `((W - w) / 2, (H - h) / 2)`.
    pub fn recenter(&mut self) {
        self.rotate_to(0.0, None);
        let rect = self.renderer.measure();
        let viewport = self.renderer.viewport();
        let target = Point::new(
            (viewport.width - rect.width()) / 2.0,
            (viewport.height - rect.height()) / 2.0,
        );
        self.move_to(self.translation + (target - rect.origin()));
    }

    /// Snapshot of the current transform, including measured center.
    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        let size = self.scaled_size();
        TransformSnapshot {
            x: self.translation.x,
            y: self.translation.y,
            width: size.width,
            height: size.height,
            angle: self.angle,
            scale: self.zoom,
            pivot: self.pivot,
            center: self.visual_center(),
        }
    }

    /// The description last sent to the renderer.
    #[must_use]
    pub fn current_transform(&self) -> ElementTransform {
        ElementTransform {
            translation: self.translation,
            angle: self.angle,
            size: self.scaled_size(),
            pivot: self.pivot,
        }
    }

    /// Current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Current zoom, always within the configured bounds.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current rotation in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current pivot as a fraction of the untransformed box.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Untransformed element size captured at construction.
    #[must_use]
    pub fn base_size(&self) -> Size {
        self.base_size
    }

    /// The options this state was built with.
    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// The renderer handle.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn scaled_size(&self) -> Size {
        self.base_size * self.zoom
    }

    fn visual_center(&self) -> Point {
        self.renderer.measure().center()
    }

    /// Changes the pivot and compensates the translation for the shift this
    /// causes on screen. The new translation reaches the renderer on the next
    /// commit.
    fn relocate_pivot(&mut self, fraction: Point) {
        let before = self.renderer.measure().origin();
        self.renderer.set_pivot(fraction);
        let after = self.renderer.measure().origin();
        self.translation += before - after;
        self.pivot = fraction;
        tracing::debug!(
            pivot_x = fraction.x,
            pivot_y = fraction.y,
            shift_x = before.x - after.x,
            shift_y = before.y - after.y,
            "pivot relocated"
        );
    }

    fn commit(&mut self) {
        let transform = self.current_transform();
        self.renderer.apply(&transform);
        tracing::trace!(
            x = transform.translation.x,
            y = transform.translation.y,
            zoom = self.zoom,
            angle = self.angle,
            "transform committed"
        );
        self.observer.on_transform(&transform);
    }
}

/// Point-in-time view of a [`TransformState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSnapshot {
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Scaled width (`base width * scale`).
    pub width: f64,
    /// Scaled height (`base height * scale`).
    pub height: f64,
    /// Rotation in degrees.
    pub angle: f64,
    /// Zoom factor.
    pub scale: f64,
    /// Pivot as a fraction of the untransformed box.
    pub pivot: Point,
    /// Center of the measured box on screen.
    pub center: Point,
}
