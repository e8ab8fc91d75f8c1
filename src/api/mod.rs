//! Top-level tick grid composition.

mod config;

pub use config::{Scale2DConfig, ScaleConfig};

use tracing::debug;

use crate::core::{Axis, Scale, TickTier, ViewBox};
use crate::error::Scale2dResult;
use crate::render::{
    AxisPass, Renderer, StyleBag, TickFrame, TickLabels, TickPrimitive, render_axis,
};

/// Minor and major tick marks for an X and a Y axis over one view box.
///
/// Every input is optional. An axis/tier without both a scale and a tick list
/// contributes nothing; without a view box the whole output is empty.
/// Label maps and label styles are per axis and apply to both tiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scale2D<'a> {
    pub view_box: Option<ViewBox>,
    pub scale_x: Option<&'a dyn Scale>,
    pub major_ticks_x: Option<&'a [f64]>,
    pub minor_ticks_x: Option<&'a [f64]>,
    pub scale_y: Option<&'a dyn Scale>,
    pub major_ticks_y: Option<&'a [f64]>,
    pub minor_ticks_y: Option<&'a [f64]>,
    pub major_style: Option<&'a StyleBag>,
    pub minor_style: Option<&'a StyleBag>,
    pub labels_x: Option<&'a TickLabels>,
    pub labels_y: Option<&'a TickLabels>,
    pub label_style_x: Option<&'a StyleBag>,
    pub label_style_y: Option<&'a StyleBag>,
}

impl<'a> Scale2D<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        self.view_box = Some(view_box);
        self
    }

    #[must_use]
    pub fn with_scale_x(mut self, scale: &'a dyn Scale) -> Self {
        self.scale_x = Some(scale);
        self
    }

    #[must_use]
    pub fn with_scale_y(mut self, scale: &'a dyn Scale) -> Self {
        self.scale_y = Some(scale);
        self
    }

    #[must_use]
    pub fn with_ticks_x(mut self, major: Option<&'a [f64]>, minor: Option<&'a [f64]>) -> Self {
        self.major_ticks_x = major;
        self.minor_ticks_x = minor;
        self
    }

    #[must_use]
    pub fn with_ticks_y(mut self, major: Option<&'a [f64]>, minor: Option<&'a [f64]>) -> Self {
        self.major_ticks_y = major;
        self.minor_ticks_y = minor;
        self
    }

    #[must_use]
    pub fn with_tick_styles(
        mut self,
        major: Option<&'a StyleBag>,
        minor: Option<&'a StyleBag>,
    ) -> Self {
        self.major_style = major;
        self.minor_style = minor;
        self
    }

    #[must_use]
    pub fn with_labels_x(
        mut self,
        labels: Option<&'a TickLabels>,
        style: Option<&'a StyleBag>,
    ) -> Self {
        self.labels_x = labels;
        self.label_style_x = style;
        self
    }

    #[must_use]
    pub fn with_labels_y(
        mut self,
        labels: Option<&'a TickLabels>,
        style: Option<&'a StyleBag>,
    ) -> Self {
        self.labels_y = labels;
        self.label_style_y = style;
        self
    }

    /// Primitives in pass order: minor-X, minor-Y, major-X, major-Y.
    #[must_use]
    pub fn render(&self) -> Vec<TickPrimitive> {
        self.render_frame().primitives
    }

    #[must_use]
    pub fn render_frame(&self) -> TickFrame {
        let Some(view_box) = self.view_box else {
            debug!("no view box; tick grid renders nothing");
            return TickFrame::empty();
        };
        let viewport = view_box.viewport();

        let mut frame = TickFrame::new(viewport);
        for (axis, tier) in [
            (Axis::X, TickTier::Minor),
            (Axis::Y, TickTier::Minor),
            (Axis::X, TickTier::Major),
            (Axis::Y, TickTier::Major),
        ] {
            match self.pass(axis, tier) {
                Some(pass) => frame.primitives.extend(render_axis(&pass, viewport)),
                None => debug!(?axis, ?tier, "skipping pass without scale or ticks"),
            }
        }

        debug!(
            width = viewport.width,
            height = viewport.height,
            primitives = frame.len(),
            "rendered tick grid"
        );
        frame
    }

    /// Builds the frame and hands it to `renderer`.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> Scale2dResult<()> {
        renderer.render(&self.render_frame())
    }

    fn pass(&self, axis: Axis, tier: TickTier) -> Option<AxisPass<'a>> {
        let (scale, ticks, labels, label_style) = match (axis, tier) {
            (Axis::X, TickTier::Minor) => (
                self.scale_x,
                self.minor_ticks_x,
                self.labels_x,
                self.label_style_x,
            ),
            (Axis::X, TickTier::Major) => (
                self.scale_x,
                self.major_ticks_x,
                self.labels_x,
                self.label_style_x,
            ),
            (Axis::Y, TickTier::Minor) => (
                self.scale_y,
                self.minor_ticks_y,
                self.labels_y,
                self.label_style_y,
            ),
            (Axis::Y, TickTier::Major) => (
                self.scale_y,
                self.major_ticks_y,
                self.labels_y,
                self.label_style_y,
            ),
        };
        let style = match tier {
            TickTier::Minor => self.minor_style,
            TickTier::Major => self.major_style,
        };

        Some(
            AxisPass::new(scale?, ticks?, axis, tier)
                .with_style(style)
                .with_labels(labels, label_style),
        )
    }
}
