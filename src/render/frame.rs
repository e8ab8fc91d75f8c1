use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{Scale2dError, Scale2dResult};
use crate::render::{LabelPrimitive, LinePrimitive, TickPrimitive};

/// Ordered tick output for one draw pass.
///
/// `viewport` is `None` when no view box was supplied; the frame is then empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickFrame {
    pub viewport: Option<Viewport>,
    pub primitives: Vec<TickPrimitive>,
}

impl TickFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_primitives(mut self, primitives: impl IntoIterator<Item = TickPrimitive>) -> Self {
        self.primitives.extend(primitives);
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> + '_ {
        self.primitives.iter().filter_map(TickPrimitive::as_line)
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelPrimitive> + '_ {
        self.primitives.iter().filter_map(TickPrimitive::as_label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Checks geometry before handing the frame to a backend.
    pub fn validate(&self) -> Scale2dResult<()> {
        if let Some(viewport) = self.viewport {
            if !viewport.is_valid() {
                return Err(Scale2dError::InvalidViewport {
                    width: viewport.width,
                    height: viewport.height,
                });
            }
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> Scale2dResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Scale2dError::Serialization(format!("failed to serialize frame: {e}")))
    }
}

impl IntoIterator for TickFrame {
    type Item = TickPrimitive;
    type IntoIter = std::vec::IntoIter<TickPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.into_iter()
    }
}
