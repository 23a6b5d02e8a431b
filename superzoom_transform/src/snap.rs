// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Snaps a free rotation to the nearest multiple of a fixed step.
///
/// Candidates are `0, step, 2 * step, ...` below 360 degrees. Candidates past
/// a full turn are not considered, so 355° does not snap to 360°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapRotation {
    /// Spacing of snap targets, in degrees.
    pub step: f64,
    /// A target qualifies only when strictly closer than this, in degrees.
    pub tolerance: f64,
}

impl SnapRotation {
    /// Creates a snap policy.
    #[must_use]
    pub const fn new(step: f64, tolerance: f64) -> Self {
        Self { step, tolerance }
    }

    /// Returns the closest snap target within tolerance, if any.
    ///
    /// `Some(0.0)` is a real match, distinct from `None`:
    ///
    /// ```
    /// use superzoom_transform::SnapRotation;
    ///
    /// let snap = SnapRotation::new(90.0, 10.0);
    /// assert_eq!(snap.closest(95.0), Some(90.0));
    /// assert_eq!(snap.closest(3.0), Some(0.0));
    /// assert_eq!(snap.closest(70.0), None);
    /// ```
    #[must_use]
    pub fn closest(&self, angle: f64) -> Option<f64> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return None;
        }

        let mut best = None;
        let mut min_diff = 360.0;
        let mut index = 0_u32;
        loop {
            let candidate = f64::from(index) * self.step;
            if candidate >= 360.0 {
                break;
            }
            let diff = (candidate - angle).abs();
            if diff < min_diff && diff < self.tolerance {
                min_diff = diff;
                best = Some(candidate);
            }
            let Some(next) = index.checked_add(1) else {
                break;
            };
            index = next;
        }
        best
    }
}
