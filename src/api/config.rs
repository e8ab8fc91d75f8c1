use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{LinearScale, LogScale, Scale, ViewBox};
use crate::error::{Scale2dError, Scale2dResult};
use crate::render::{Renderer, StyleBag, TickFrame, TickLabels};

use super::Scale2D;

/// Serializable description of a value-space scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleConfig {
    Linear {
        min: f64,
        max: f64,
        #[serde(default)]
        inverted: bool,
    },
    Log {
        min: f64,
        max: f64,
        #[serde(default)]
        inverted: bool,
    },
}

impl ScaleConfig {
    #[must_use]
    pub fn linear(min: f64, max: f64) -> Self {
        Self::Linear {
            min,
            max,
            inverted: false,
        }
    }

    #[must_use]
    pub fn log(min: f64, max: f64) -> Self {
        Self::Log {
            min,
            max,
            inverted: false,
        }
    }

    pub fn build(self) -> Scale2dResult<Box<dyn Scale>> {
        match self {
            Self::Linear { min, max, inverted } => {
                Ok(Box::new(LinearScale::try_new(min, max, inverted)?))
            }
            Self::Log { min, max, inverted } => Ok(Box::new(LogScale::new(min, max, inverted)?)),
        }
    }
}

/// Owned, serializable tick grid setup.
///
/// Hosts persist/load this instead of wiring a [`Scale2D`] by hand. Every
/// field is optional and defaults to absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scale2DConfig {
    pub view_box: Option<ViewBox>,
    pub scale_x: Option<ScaleConfig>,
    pub major_ticks_x: Option<Vec<f64>>,
    pub minor_ticks_x: Option<Vec<f64>>,
    pub scale_y: Option<ScaleConfig>,
    pub major_ticks_y: Option<Vec<f64>>,
    pub minor_ticks_y: Option<Vec<f64>>,
    pub major_style: Option<StyleBag>,
    pub minor_style: Option<StyleBag>,
    pub labels_x: Option<TickLabels>,
    pub labels_y: Option<TickLabels>,
    pub label_style_x: Option<StyleBag>,
    pub label_style_y: Option<StyleBag>,
}

impl Scale2DConfig {
    #[must_use]
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box: Some(view_box),
            ..Self::default()
        }
    }

    /// Builds the configured scales, then composes the tick grid.
    ///
    /// Only scale construction can fail; composition itself never does.
    pub fn render_frame(&self) -> Scale2dResult<TickFrame> {
        let scale_x = self.scale_x.map(ScaleConfig::build).transpose()?;
        let scale_y = self.scale_y.map(ScaleConfig::build).transpose()?;
        self.warn_unscaled_ticks();

        let grid = Scale2D {
            view_box: self.view_box,
            scale_x: scale_x.as_deref(),
            major_ticks_x: self.major_ticks_x.as_deref(),
            minor_ticks_x: self.minor_ticks_x.as_deref(),
            scale_y: scale_y.as_deref(),
            major_ticks_y: self.major_ticks_y.as_deref(),
            minor_ticks_y: self.minor_ticks_y.as_deref(),
            major_style: self.major_style.as_ref(),
            minor_style: self.minor_style.as_ref(),
            labels_x: self.labels_x.as_ref(),
            labels_y: self.labels_y.as_ref(),
            label_style_x: self.label_style_x.as_ref(),
            label_style_y: self.label_style_y.as_ref(),
        };
        Ok(grid.render_frame())
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> Scale2dResult<()> {
        renderer.render(&self.render_frame()?)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> Scale2dResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Scale2dError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> Scale2dResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| Scale2dError::Serialization(format!("failed to parse config: {e}")))
    }

    fn warn_unscaled_ticks(&self) {
        if self.scale_x.is_none() && (self.major_ticks_x.is_some() || self.minor_ticks_x.is_some())
        {
            warn!(axis = "x", "tick lists configured without a scale; passes skipped");
        }
        if self.scale_y.is_none() && (self.major_ticks_y.is_some() || self.minor_ticks_y.is_some())
        {
            warn!(axis = "y", "tick lists configured without a scale; passes skipped");
        }
    }
}
