// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle and polar helpers shared by the pivot solver and gesture code.
//!
//! Degrees are the unit of the public API (they are what ends up in a CSS
//! `rotate()`), radians are what the trigonometry works in. Conversion goes
//! through [`f64::to_radians`] / [`f64::to_degrees`].

use core::f64::consts::{PI, TAU};

use kurbo::Vec2;

/// Brings a degree angle back into `[0, 360)` by adding or subtracting a
/// single full turn.
///
/// Only one turn is applied. An angle more than one turn outside the range
/// stays outside it:
///
/// ```
/// use superzoom_transform::wrap_degrees_once;
///
/// assert_eq!(wrap_degrees_once(370.0), 10.0);
/// assert_eq!(wrap_degrees_once(-30.0), 330.0);
/// assert_eq!(wrap_degrees_once(800.0), 440.0);
/// ```
#[must_use]
pub fn wrap_degrees_once(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + 360.0
    } else if angle >= 360.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// Wraps the difference of two `atan2` results into `(-PI, PI]`.
///
/// Both operands lie in `(-PI, PI]`, so one turn of correction is enough.
#[must_use]
pub fn wrap_radians_delta(delta: f64) -> f64 {
    if delta > PI {
        delta - TAU
    } else if delta <= -PI {
        delta + TAU
    } else {
        delta
    }
}

/// A 2D vector in polar form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    /// Distance from the origin.
    pub radius: f64,
    /// Angle from the positive x axis, in radians.
    ///
    /// Screen space has y pointing down, so positive angles turn clockwise.
    pub theta: f64,
}

impl Polar {
    /// Converts a Cartesian vector into polar form.
    #[must_use]
    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            radius: v.hypot(),
            theta: v.atan2(),
        }
    }

    /// Converts back into a Cartesian vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::from_angle(self.theta) * self.radius
    }

    /// Returns the same vector turned by `radians`.
    #[must_use]
    pub fn rotated(self, radians: f64) -> Self {
        Self {
            radius: self.radius,
            theta: self.theta + radians,
        }
    }
}
