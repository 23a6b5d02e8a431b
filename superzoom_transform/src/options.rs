// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::snap::SnapRotation;

/// How vertical and horizontal wheel deltas are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelBehavior {
    /// Wheel deltas pan the element.
    ///
    /// Holding the precise-zoom modifier (what trackpads report for a pinch)
    /// zooms with the vertical delta and rotates with the horizontal one.
    #[default]
    Scroll,
    /// Every wheel tick zooms about the pointer by `zoom_step`.
    Zoom,
}

/// Configuration for a transform state and the gestures driving it.
///
/// Options are fixed once the state is constructed. Start from
/// [`ZoomOptions::default`] and adjust with the `with_*` helpers:
///
/// ```
/// use superzoom_transform::{WheelBehavior, ZoomOptions};
///
/// let options = ZoomOptions::default()
///     .with_zoom_limits(0.5, 8.0)
///     .with_snap_rotation(45.0, 5.0)
///     .with_wheel_behavior(WheelBehavior::Zoom);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOptions {
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Wheel delta fed to the scale multiplier per tick in [`WheelBehavior::Zoom`].
    pub zoom_step: f64,
    /// Flips the wheel zoom direction.
    pub inverted_zoom: bool,
    /// Zoom at construction, clamped into the zoom bounds.
    pub initial_zoom: f64,
    /// Horizontal translation at construction.
    pub initial_x: f64,
    /// Vertical translation at construction.
    pub initial_y: f64,
    /// Rotation at construction, in degrees.
    pub initial_angle: f64,
    /// Snap the rotation to a multiple of `snap_rotation_step` when a touch
    /// gesture ends.
    pub snap_rotation: bool,
    /// Spacing of snap targets, in degrees.
    pub snap_rotation_step: f64,
    /// Maximum distance to a snap target, in degrees (exclusive).
    pub snap_rotation_tolerance: f64,
    /// Wheel interpretation.
    pub wheel_behavior: WheelBehavior,
    /// Degrees of rotation per unit of horizontal wheel delta in precise mode.
    pub wheel_rotate_speed: f64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 200.0,
            zoom_step: 10.0,
            inverted_zoom: false,
            initial_zoom: 1.0,
            initial_x: 0.0,
            initial_y: 0.0,
            initial_angle: 0.0,
            snap_rotation: false,
            snap_rotation_step: 90.0,
            snap_rotation_tolerance: 10.0,
            wheel_behavior: WheelBehavior::default(),
            wheel_rotate_speed: 0.1,
        }
    }
}

impl ZoomOptions {
    /// Sets the zoom bounds.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the wheel zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Flips the wheel zoom direction.
    #[must_use]
    pub fn with_inverted_zoom(mut self, inverted: bool) -> Self {
        self.inverted_zoom = inverted;
        self
    }

    /// Sets the zoom the state starts at.
    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// Sets the translation the state starts at.
    #[must_use]
    pub fn with_initial_position(mut self, x: f64, y: f64) -> Self {
        self.initial_x = x;
        self.initial_y = y;
        self
    }

    /// Sets the rotation the state starts at.
    #[must_use]
    pub fn with_initial_angle(mut self, angle: f64) -> Self {
        self.initial_angle = angle;
        self
    }

    /// Enables rotation snapping on touch release.
    #[must_use]
    pub fn with_snap_rotation(mut self, step: f64, tolerance: f64) -> Self {
        self.snap_rotation = true;
        self.snap_rotation_step = step;
        self.snap_rotation_tolerance = tolerance;
        self
    }

    /// Sets how wheel events are interpreted.
    #[must_use]
    pub fn with_wheel_behavior(mut self, behavior: WheelBehavior) -> Self {
        self.wheel_behavior = behavior;
        self
    }

    /// Sets the precise-mode wheel rotation speed.
    #[must_use]
    pub fn with_wheel_rotate_speed(mut self, speed: f64) -> Self {
        self.wheel_rotate_speed = speed;
        self
    }

    /// The snap policy, if snapping is enabled.
    #[must_use]
    pub fn snap_policy(&self) -> Option<SnapRotation> {
        self.snap_rotation.then(|| {
            SnapRotation::new(self.snap_rotation_step, self.snap_rotation_tolerance)
        })
    }

    /// Checks that the options describe a usable configuration.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(OptionsError::MinZoom(self.min_zoom));
        }
        if self.max_zoom.is_nan() || self.max_zoom < self.min_zoom {
            return Err(OptionsError::ZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        for (option, value) in [
            ("zoom_step", self.zoom_step),
            ("initial_zoom", self.initial_zoom),
            ("initial_x", self.initial_x),
            ("initial_y", self.initial_y),
            ("initial_angle", self.initial_angle),
            ("wheel_rotate_speed", self.wheel_rotate_speed),
        ] {
            if !value.is_finite() {
                return Err(OptionsError::NonFinite { option, value });
            }
        }
        if self.snap_rotation {
            if !(self.snap_rotation_step.is_finite() && self.snap_rotation_step > 0.0) {
                return Err(OptionsError::SnapStep(self.snap_rotation_step));
            }
            if self.snap_rotation_tolerance.is_nan() || self.snap_rotation_tolerance < 0.0 {
                return Err(OptionsError::SnapTolerance(self.snap_rotation_tolerance));
            }
        }
        Ok(())
    }
}

/// Error returned when [`ZoomOptions`] cannot be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionsError {
    /// `min_zoom` is zero, negative or not finite.
    MinZoom(f64),
    /// `max_zoom` is below `min_zoom` (or NaN).
    ZoomRange {
        /// The configured lower bound.
        min: f64,
        /// The configured upper bound.
        max: f64,
    },
    /// Snapping is enabled with a step that is not a positive finite number.
    SnapStep(f64),
    /// Snapping is enabled with a negative or NaN tolerance.
    SnapTolerance(f64),
    /// A numeric option that must be finite is not.
    NonFinite {
        /// Name of the offending option.
        option: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinZoom(min) => write!(f, "min_zoom must be positive and finite, got {min}"),
            Self::ZoomRange { min, max } => {
                write!(f, "max_zoom ({max}) must not be below min_zoom ({min})")
            }
            Self::SnapStep(step) => {
                write!(f, "snap_rotation_step must be positive and finite, got {step}")
            }
            Self::SnapTolerance(tolerance) => {
                write!(f, "snap_rotation_tolerance must not be negative, got {tolerance}")
            }
            Self::NonFinite { option, value } => write!(f, "{option} must be finite, got {value}"),
        }
    }
}

impl core::error::Error for OptionsError {}
