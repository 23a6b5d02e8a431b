// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering collaborator and the transform description it receives.

use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Pivot fraction at the middle of the element.
pub const CENTER_PIVOT: Point = Point::new(0.5, 0.5);

/// Everything a renderer needs to place the managed element.
///
/// The element is sized to `size` and then transformed by
/// `translate(translation) rotate(angle)` about the point `pivot * size`,
/// matching CSS `transform` / `transform-origin` composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    /// Translation in pointer units.
    pub translation: Vec2,
    /// Rotation in degrees, clockwise on screen.
    pub angle: f64,
    /// Scaled element size (`base_size * zoom`).
    pub size: Size,
    /// Pivot as a fraction of `size`.
    pub pivot: Point,
}

impl ElementTransform {
    /// The description of an element that has not been moved, rotated or zoomed.
    #[must_use]
    pub fn untransformed(size: Size) -> Self {
        Self {
            translation: Vec2::ZERO,
            angle: 0.0,
            size,
            pivot: CENTER_PIVOT,
        }
    }

    /// The pivot in element-local coordinates.
    #[must_use]
    pub fn pivot_offset(&self) -> Vec2 {
        Vec2::new(
            self.pivot.x * self.size.width,
            self.pivot.y * self.size.height,
        )
    }

    /// Maps element-local coordinates into screen space for an element laid
    /// out at `layout_origin`.
    #[must_use]
    pub fn to_affine(&self, layout_origin: Point) -> Affine {
        let origin = self.pivot_offset();
        Affine::translate(layout_origin.to_vec2() + origin + self.translation)
            * Affine::rotate(self.angle.to_radians())
            * Affine::translate(-origin)
    }

    /// CSS `transform` value, e.g. `translate(10px, 20px) rotate(45deg)`.
    ///
    /// Size is not part of this value; web hosts set `width`/`height` from
    /// [`ElementTransform::size`].
    #[must_use]
    pub fn css_transform(&self) -> CssTransform {
        CssTransform(*self)
    }

    /// CSS `transform-origin` value, e.g. `50% 50%`.
    #[must_use]
    pub fn css_transform_origin(&self) -> CssTransformOrigin {
        CssTransformOrigin(self.pivot)
    }
}

/// [`Display`](fmt::Display) adapter returned by [`ElementTransform::css_transform`].
#[derive(Clone, Copy, Debug)]
pub struct CssTransform(ElementTransform);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write!(
            f,
            "translate({}px, {}px) rotate({}deg)",
            t.translation.x, t.translation.y, t.angle
        )
    }
}

/// [`Display`](fmt::Display) adapter returned by [`ElementTransform::css_transform_origin`].
#[derive(Clone, Copy, Debug)]
pub struct CssTransformOrigin(Point);

impl fmt::Display for CssTransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.0.x * 100.0, self.0.y * 100.0)
    }
}

/// Backend that places the managed element on screen.
///
/// The element itself is owned by the host; implementors are handles to it.
/// [`Renderer::measure`] must reflect every earlier [`Renderer::apply`] and
/// [`Renderer::set_pivot`] call synchronously: pivot relocation measures,
/// changes the pivot, and measures again within one call.
///
/// The element must stay attached while a transform state drives it; there
/// is no fallback when a measurement is unavailable.
pub trait Renderer {
    /// Applies size, translation, rotation and pivot.
    fn apply(&mut self, transform: &ElementTransform);

    /// Changes only the pivot fraction, keeping the last applied translation,
    /// rotation and size.
    fn set_pivot(&mut self, pivot: Point);

    /// Current axis-aligned screen-space bounding box of the element.
    fn measure(&self) -> Rect;

    /// Size of the viewport the element is shown in.
    fn viewport(&self) -> Size;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn apply(&mut self, transform: &ElementTransform) {
        (**self).apply(transform);
    }

    fn set_pivot(&mut self, pivot: Point) {
        (**self).set_pivot(pivot);
    }

    fn measure(&self) -> Rect {
        (**self).measure()
    }

    fn viewport(&self) -> Size {
        (**self).viewport()
    }
}
