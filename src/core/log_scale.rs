use serde::{Deserialize, Serialize};

use crate::core::Scale;
use crate::error::{Scale2dError, Scale2dResult};

/// Natural-log mapping of `[min, max]` onto the unit interval.
///
/// Both bounds must be positive. Non-positive inputs normalize to NaN or
/// negative infinity, following `f64::ln`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    min: f64,
    max: f64,
    #[serde(default)]
    inverted: bool,
}

impl LogScale {
    pub fn new(min: f64, max: f64, inverted: bool) -> Scale2dResult<Self> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max <= 0.0 {
            return Err(Scale2dError::InvalidScale(format!(
                "log scale bounds must be finite and > 0 (min={min}, max={max})"
            )));
        }
        if min == max {
            return Err(Scale2dError::InvalidScale(
                "log scale bounds must differ".to_owned(),
            ));
        }
        Ok(Self { min, max, inverted })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    fn log_span(self) -> (f64, f64) {
        let ln_min = self.min.ln();
        (ln_min, self.max.ln() - ln_min)
    }
}

impl Scale for LogScale {
    fn normalize(&self, value: f64) -> f64 {
        let (ln_min, ln_span) = self.log_span();
        let unit = (value.ln() - ln_min) / ln_span;
        if self.inverted { 1.0 - unit } else { unit }
    }

    fn denormalize(&self, unit: f64) -> f64 {
        let unit = if self.inverted { 1.0 - unit } else { unit };
        let (ln_min, ln_span) = self.log_span();
        (ln_min + unit * ln_span).exp()
    }
}
