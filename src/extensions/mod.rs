//! After-draw extensions layered on top of the chart's own pass.

pub mod plugins;
pub mod watermark;

pub use plugins::{ChartPlugin, PluginContext};
pub use watermark::{OverlayLabels, WatermarkPlugin};
