mod axis_ticks;
mod frame;
mod labels;
mod null_renderer;
mod primitives;
mod svg;

pub use axis_ticks::{AxisPass, TickDecor, render_axis, render_x_ticks, render_y_ticks};
pub use frame::TickFrame;
pub use labels::TickLabels;
pub use null_renderer::NullRenderer;
pub use primitives::{LabelPrimitive, LinePrimitive, StyleBag, TICK_LABEL_CLASS, TickPrimitive};
pub use svg::{SvgRenderStats, SvgRenderer, style_to_css};

use crate::error::Scale2dResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `TickFrame`, so drawing code stays
/// isolated from scale math and tick composition.
pub trait Renderer {
    fn render(&mut self, frame: &TickFrame) -> Scale2dResult<()>;
}
