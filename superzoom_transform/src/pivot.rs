// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pivot solving: which fraction of the element is under a screen point.
//!
//! This is the pure half of pivot relocation. The other half, keeping the
//! element still while the pivot changes, needs the renderer to measure the
//! box before and after; see [`TransformState::set_pivot`].
//!
//! [`TransformState::set_pivot`]: crate::TransformState::set_pivot

use kurbo::{Point, Rect, Size};

use crate::geometry::Polar;
use crate::render::CENTER_PIVOT;

/// Returns the pivot fraction of the element's untransformed box that is
/// currently displayed at `target`.
///
/// - `rect`: the measured (post-transform) bounding box.
/// - `angle`: current rotation in degrees.
/// - `zoom`: current scale.
/// - `base`: untransformed element size.
///
/// The bounding box center is the element's visual center for any rotation,
/// so the target is expressed relative to it, rotated back into the
/// element's frame and unscaled. For a rotated element the measured box is
/// larger than `base * zoom`; the half-box term re-added after unscaling is
/// taken from the measured box and then corrected back to half the base box.
///
/// Returns [`CENTER_PIVOT`] for an empty base size or a non-positive zoom.
#[must_use]
pub fn solve_pivot_fraction(target: Point, rect: Rect, angle: f64, zoom: f64, base: Size) -> Point {
    if base.width <= 0.0 || base.height <= 0.0 || zoom <= 0.0 {
        return CENTER_PIVOT;
    }

    let offset = target - rect.center();
    let unrotated = Polar::from_vec2(offset)
        .rotated(-angle.to_radians())
        .to_vec2();

    let mut x = unrotated.x / zoom + rect.width() / zoom / 2.0;
    let mut y = unrotated.y / zoom + rect.height() / zoom / 2.0;

    x += (0.5 - rect.width() / (zoom * base.width) / 2.0) * base.width;
    y += (0.5 - rect.height() / (zoom * base.height) / 2.0) * base.height;

    Point::new(x / base.width, y / base.height)
}
