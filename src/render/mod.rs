mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, RectPrimitive, TextPrimitive};

use crate::error::LayoutResult;

/// Contract implemented by the external rasterizer.
///
/// Backends receive final, already-arranged primitives; they never see the
/// layout tree or its alignment rules.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()>;
}
