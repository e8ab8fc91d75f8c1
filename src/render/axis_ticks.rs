use tracing::trace;

use crate::core::{Axis, PixelConverter, Scale, TickTier, Viewport};
use crate::render::{LabelPrimitive, LinePrimitive, StyleBag, TickLabels, TickPrimitive};

/// Per-pass decoration shared by every tick of one axis/tier.
#[derive(Debug, Clone, Copy)]
pub struct TickDecor<'a> {
    pub class: &'a str,
    pub style: Option<&'a StyleBag>,
    pub labels: Option<&'a TickLabels>,
    pub label_style: Option<&'a StyleBag>,
}

impl<'a> TickDecor<'a> {
    #[must_use]
    pub fn new(class: &'a str) -> Self {
        Self {
            class,
            style: None,
            labels: None,
            label_style: None,
        }
    }

    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> TickPrimitive {
        LinePrimitive::new(x1, y1, x2, y2, self.class, self.style.cloned()).into()
    }

    fn label(&self, tick: f64, x: f64, y: f64) -> Option<TickPrimitive> {
        let text = self.labels?.label_for(tick)?;
        Some(LabelPrimitive::new(x, y, text, self.label_style.cloned()).into())
    }
}

/// Vertical tick lines for an X axis, each spanning `span` on the Y dimension.
///
/// Labels anchor at `(x, span.0)` and directly follow their line.
#[must_use]
pub fn render_x_ticks(
    ticks: &[f64],
    converter: &PixelConverter<'_>,
    (min, max): (f64, f64),
    decor: &TickDecor<'_>,
) -> Vec<TickPrimitive> {
    let mut out = Vec::with_capacity(ticks.len());
    for &tick in ticks {
        let x = converter.tick_coordinate(tick);
        out.push(decor.line(x, min, x, max));
        if let Some(label) = decor.label(tick, x, min) {
            out.push(label);
        }
    }
    out
}

/// Horizontal tick lines for a Y axis, each spanning `span` on the X dimension.
///
/// Labels anchor at `(span.0, y)` and directly follow their line.
#[must_use]
pub fn render_y_ticks(
    ticks: &[f64],
    converter: &PixelConverter<'_>,
    (min, max): (f64, f64),
    decor: &TickDecor<'_>,
) -> Vec<TickPrimitive> {
    let mut out = Vec::with_capacity(ticks.len());
    for &tick in ticks {
        let y = converter.tick_coordinate(tick);
        out.push(decor.line(min, y, max, y));
        if let Some(label) = decor.label(tick, min, y) {
            out.push(label);
        }
    }
    out
}

/// One (axis, tier) render pass.
#[derive(Debug, Clone, Copy)]
pub struct AxisPass<'a> {
    pub scale: &'a dyn Scale,
    pub ticks: &'a [f64],
    pub axis: Axis,
    pub tier: TickTier,
    pub style: Option<&'a StyleBag>,
    pub labels: Option<&'a TickLabels>,
    pub label_style: Option<&'a StyleBag>,
}

impl<'a> AxisPass<'a> {
    #[must_use]
    pub fn new(scale: &'a dyn Scale, ticks: &'a [f64], axis: Axis, tier: TickTier) -> Self {
        Self {
            scale,
            ticks,
            axis,
            tier,
            style: None,
            labels: None,
            label_style: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Option<&'a StyleBag>) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_labels(
        mut self,
        labels: Option<&'a TickLabels>,
        label_style: Option<&'a StyleBag>,
    ) -> Self {
        self.labels = labels;
        self.label_style = label_style;
        self
    }
}

/// Renders one pass against `viewport`. Ticks outside the viewport still
/// produce primitives; nothing is sorted, deduplicated or clamped.
#[must_use]
pub fn render_axis(pass: &AxisPass<'_>, viewport: Viewport) -> Vec<TickPrimitive> {
    let converter = PixelConverter::new(pass.scale, pass.axis, viewport);
    let span = viewport.cross_span(pass.axis);
    let decor = TickDecor {
        class: pass.tier.class_name(),
        style: pass.style,
        labels: pass.labels,
        label_style: pass.label_style,
    };

    let out = match pass.axis {
        Axis::X => render_x_ticks(pass.ticks, &converter, span, &decor),
        Axis::Y => render_y_ticks(pass.ticks, &converter, span, &decor),
    };
    trace!(
        axis = ?pass.axis,
        tier = ?pass.tier,
        ticks = pass.ticks.len(),
        primitives = out.len(),
        "rendered axis pass"
    );
    out
}
