use crate::error::LayoutResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that draws nothing, used by tests and headless layout runs.
///
/// Frames are still validated so arranged geometry is checked end to end.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
