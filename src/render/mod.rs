mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::QuadrantResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from classification and data fetching.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> QuadrantResult<()>;
}
