use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::render::RenderFrame;

/// Read-only state passed to after-draw hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub points_len: usize,
}

/// Hook run once the chart's own draw pass has filled the frame.
///
/// Plugins may only append primitives, so whatever they draw sits on top of
/// the points without moving them.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn after_draw(&self, context: PluginContext, frame: &mut RenderFrame);
}
