use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{Scale2dError, Scale2dResult};

/// Monotonic mapping between a numeric range and the unit interval.
///
/// Two scales are bridged through their shared unit interval, so any
/// implementation (linear, log, ...) can convert into any other.
pub trait Scale: Debug + Send + Sync {
    /// Maps `value` from this scale's range into unit space, honoring orientation.
    ///
    /// Values outside the range extrapolate; nothing is clamped.
    fn normalize(&self, value: f64) -> f64;

    /// Inverse of [`Scale::normalize`].
    fn denormalize(&self, unit: f64) -> f64;

    /// Converts `value` under this scale into the corresponding value under `target`.
    fn convert_to(&self, target: &dyn Scale, value: f64) -> f64 {
        target.denormalize(self.normalize(value))
    }
}

/// Affine mapping of `[min, max]` onto the unit interval.
///
/// With `inverted = true`, `min` maps to unit 1 and `max` to unit 0. Pixel-space
/// Y scales use this because screen coordinates grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    min: f64,
    max: f64,
    #[serde(default)]
    inverted: bool,
}

impl LinearScale {
    #[must_use]
    pub const fn new(min: f64, max: f64, inverted: bool) -> Self {
        Self { min, max, inverted }
    }

    /// Same as [`LinearScale::new`] but rejects non-finite bounds.
    pub fn try_new(min: f64, max: f64, inverted: bool) -> Scale2dResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Scale2dError::InvalidScale(format!(
                "linear scale bounds must be finite (min={min}, max={max})"
            )));
        }
        Ok(Self::new(min, max, inverted))
    }

    /// Pixel-space scale spanning `[0, extent]`.
    #[must_use]
    pub const fn pixel_span(extent: f64, inverted: bool) -> Self {
        Self::new(0.0, extent, inverted)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }
}

impl Scale for LinearScale {
    fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        // Degenerate domain: every value sits in the middle.
        let unit = if span == 0.0 {
            0.5
        } else {
            (value - self.min) / span
        };
        if self.inverted { 1.0 - unit } else { unit }
    }

    fn denormalize(&self, unit: f64) -> f64 {
        let unit = if self.inverted { 1.0 - unit } else { unit };
        self.min + unit * (self.max - self.min)
    }
}
