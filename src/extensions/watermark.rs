use serde::{Deserialize, Serialize};

use crate::core::Quadrant;
use crate::extensions::plugins::{ChartPlugin, PluginContext};
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

pub const DEFAULT_TOP_RIGHT_LABEL: &str = "1 - High Priority";
pub const DEFAULT_TOP_LEFT_LABEL: &str = "2O - Big Impact";
pub const DEFAULT_LOWER_RIGHT_LABEL: &str = "2R - Quick Win";
pub const DEFAULT_LOWER_LEFT_LABEL: &str = "3 - Low Priority";

pub const WATERMARK_FONT_SIZE_PX: f64 = 14.0;
pub const WATERMARK_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.3);

/// Static text drawn over the center of each quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayLabels {
    pub top_right: String,
    pub top_left: String,
    pub lower_right: String,
    pub lower_left: String,
}

impl Default for OverlayLabels {
    fn default() -> Self {
        Self {
            top_right: DEFAULT_TOP_RIGHT_LABEL.to_owned(),
            top_left: DEFAULT_TOP_LEFT_LABEL.to_owned(),
            lower_right: DEFAULT_LOWER_RIGHT_LABEL.to_owned(),
            lower_left: DEFAULT_LOWER_LEFT_LABEL.to_owned(),
        }
    }
}

impl OverlayLabels {
    /// Fills each blank label with its own default.
    #[must_use]
    pub fn with_defaults(
        top_right: Option<&str>,
        top_left: Option<&str>,
        lower_right: Option<&str>,
        lower_left: Option<&str>,
    ) -> Self {
        fn pick(value: Option<&str>, fallback: &str) -> String {
            match value.map(str::trim) {
                Some(text) if !text.is_empty() => text.to_owned(),
                _ => fallback.to_owned(),
            }
        }

        Self {
            top_right: pick(top_right, DEFAULT_TOP_RIGHT_LABEL),
            top_left: pick(top_left, DEFAULT_TOP_LEFT_LABEL),
            lower_right: pick(lower_right, DEFAULT_LOWER_RIGHT_LABEL),
            lower_left: pick(lower_left, DEFAULT_LOWER_LEFT_LABEL),
        }
    }

    #[must_use]
    pub fn label_for(&self, quadrant: Quadrant) -> &str {
        match quadrant {
            Quadrant::HighHigh => &self.top_right,
            Quadrant::LowHigh => &self.top_left,
            Quadrant::LowLow => &self.lower_left,
            Quadrant::HighLow => &self.lower_right,
        }
    }
}

/// After-draw plugin writing [`OverlayLabels`] at the quadrant centers.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkPlugin {
    labels: OverlayLabels,
}

impl WatermarkPlugin {
    #[must_use]
    pub fn new(labels: OverlayLabels) -> Self {
        Self { labels }
    }

    #[must_use]
    pub fn labels(&self) -> &OverlayLabels {
        &self.labels
    }
}

impl ChartPlugin for WatermarkPlugin {
    fn id(&self) -> &str {
        "watermark"
    }

    fn after_draw(&self, context: PluginContext, frame: &mut RenderFrame) {
        if !context.plot_area.is_valid() {
            return;
        }

        for quadrant in Quadrant::ALL {
            let text = self.labels.label_for(quadrant);
            if text.is_empty() {
                continue;
            }
            let (x_fraction, y_fraction) = quadrant.center_fraction();
            let (x, y) = context.plot_area.point_at_fraction(x_fraction, y_fraction);
            frame.texts.push(
                TextPrimitive::new(
                    text,
                    x,
                    y,
                    WATERMARK_FONT_SIZE_PX,
                    WATERMARK_COLOR,
                    TextHAlign::Center,
                )
                .bold()
                .with_v_align(TextVAlign::Middle),
            );
        }
    }
}
