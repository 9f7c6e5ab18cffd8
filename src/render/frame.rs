use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{QuadrantError, QuadrantResult};
use crate::render::{CirclePrimitive, LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are drawn in field order: lines, then circles, then texts.
/// Texts appended by after-draw plugins therefore sit on top of the points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> QuadrantResult<()> {
        if !self.viewport.is_valid() {
            return Err(QuadrantError::InvalidData(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }
}
