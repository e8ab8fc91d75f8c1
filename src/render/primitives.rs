use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Scale2dError, Scale2dResult};

/// Opaque visual properties carried through to each primitive untouched.
///
/// Keys keep insertion order so backends emit them deterministically.
pub type StyleBag = IndexMap<String, serde_json::Value>;

/// Class tag attached to every tick label.
pub const TICK_LABEL_CLASS: &str = "tickmark-label";

/// Draw command for one tick line in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleBag>,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        class: impl Into<String>,
        style: Option<StyleBag>,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            class: class.into(),
            style,
        }
    }

    pub fn validate(&self) -> Scale2dResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(Scale2dError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one tick label anchored in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub x: f64,
    pub y: f64,
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleBag>,
    pub text: String,
}

impl LabelPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>, style: Option<StyleBag>) -> Self {
        Self {
            x,
            y,
            class: TICK_LABEL_CLASS.to_owned(),
            style,
            text: text.into(),
        }
    }

    pub fn validate(&self) -> Scale2dResult<()> {
        if self.text.is_empty() {
            return Err(Scale2dError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(Scale2dError::InvalidData(
                "label coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One drawable item of tick output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickPrimitive {
    Line(LinePrimitive),
    Label(LabelPrimitive),
}

impl TickPrimitive {
    #[must_use]
    pub fn as_line(&self) -> Option<&LinePrimitive> {
        match self {
            Self::Line(line) => Some(line),
            Self::Label(_) => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> Option<&LabelPrimitive> {
        match self {
            Self::Label(label) => Some(label),
            Self::Line(_) => None,
        }
    }

    #[must_use]
    pub fn class(&self) -> &str {
        match self {
            Self::Line(line) => &line.class,
            Self::Label(label) => &label.class,
        }
    }

    pub fn validate(&self) -> Scale2dResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Label(label) => label.validate(),
        }
    }
}

impl From<LinePrimitive> for TickPrimitive {
    fn from(line: LinePrimitive) -> Self {
        Self::Line(line)
    }
}

impl From<LabelPrimitive> for TickPrimitive {
    fn from(label: LabelPrimitive) -> Self {
        Self::Label(label)
    }
}
