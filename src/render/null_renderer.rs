use crate::error::Scale2dResult;
use crate::render::{Renderer, TickFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry surfaces without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &TickFrame) -> Scale2dResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines().count();
        self.last_label_count = frame.labels().count();
        Ok(())
    }
}
