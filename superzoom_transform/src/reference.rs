// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless renderer that models CSS transform composition.
//!
//! It is meant for tests, benchmarks and hosts without a layout engine. It
//! keeps the last applied [`ElementTransform`] and derives the measured box
//! from it, the same way a browser's `getBoundingClientRect` reports the
//! bounding box of a transformed element.

use kurbo::{Affine, Point, Rect, Size};

use crate::render::{ElementTransform, Renderer};

/// A [`Renderer`] that computes geometry instead of drawing.
#[derive(Clone, Debug)]
pub struct ReferenceRenderer {
    layout_origin: Point,
    viewport: Size,
    transform: ElementTransform,
    commits: usize,
}

impl ReferenceRenderer {
    /// Creates a renderer for an element laid out at `layout` (its
    /// untransformed box) inside a viewport of size `viewport`.
    #[must_use]
    pub fn new(layout: Rect, viewport: Size) -> Self {
        Self {
            layout_origin: layout.origin(),
            viewport,
            transform: ElementTransform::untransformed(layout.size()),
            commits: 0,
        }
    }

    /// The last transform applied, with any later pivot change folded in.
    #[must_use]
    pub fn transform(&self) -> &ElementTransform {
        &self.transform
    }

    /// Number of [`Renderer::apply`] calls so far.
    #[must_use]
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Resizes the viewport, as a window resize would.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Element-local to screen mapping for the current state.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.transform.to_affine(self.layout_origin)
    }

    /// Screen position of the material point at `fraction` of the element.
    #[must_use]
    pub fn point_at_fraction(&self, fraction: Point) -> Point {
        let size = self.transform.size;
        self.affine() * Point::new(fraction.x * size.width, fraction.y * size.height)
    }

    /// Fraction of the element currently under the screen point `point`.
    ///
    /// Returns the origin for an element with an empty size.
    #[must_use]
    pub fn fraction_at_point(&self, point: Point) -> Point {
        let size = self.transform.size;
        if size.width <= 0.0 || size.height <= 0.0 {
            return Point::ZERO;
        }
        let local = self.affine().inverse() * point;
        Point::new(local.x / size.width, local.y / size.height)
    }
}

impl Renderer for ReferenceRenderer {
    fn apply(&mut self, transform: &ElementTransform) {
        self.transform = *transform;
        self.commits += 1;
    }

    fn set_pivot(&mut self, pivot: Point) {
        self.transform.pivot = pivot;
    }

    fn measure(&self) -> Rect {
        let local = Rect::from_origin_size(Point::ZERO, self.transform.size);
        self.affine().transform_rect_bbox(local)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}
