use serde::{Deserialize, Serialize};

/// Full bounding box of the drawing surface as `[x, y, width, height]`.
///
/// Only the size is consumed; any origin offset is applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl From<[f64; 4]> for ViewBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<ViewBox> for [f64; 4] {
    fn from(view_box: ViewBox) -> Self {
        [view_box.x, view_box.y, view_box.width, view_box.height]
    }
}

/// Pixel extent with a top-left origin at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pixel length along `axis` (width for X, height for Y).
    #[must_use]
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// `(min, max)` of the dimension perpendicular to `axis`.
    #[must_use]
    pub fn cross_span(self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (0.0, self.height),
            Axis::Y => (0.0, self.width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis; ticks are vertical lines.
    X,
    /// Vertical axis; ticks are horizontal lines.
    Y,
}

impl Axis {
    /// Whether the pixel-space scale for this axis runs opposite to pixel coordinates.
    #[must_use]
    pub fn is_pixel_inverted(self) -> bool {
        matches!(self, Self::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickTier {
    Minor,
    Major,
}

impl TickTier {
    /// Class tag attached to every line of this tier.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Minor => "tickmark-minor",
            Self::Major => "tickmark-major",
        }
    }
}
