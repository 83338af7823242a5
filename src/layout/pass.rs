use tracing::{debug, debug_span};

use crate::core::{Point, Size, TextMeasurer};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{MeasureContext, Visual};
use crate::render::{RenderFrame, Renderer};

/// Runs one full layout pass over `root`: measure bottom-up, then arrange at `anchor`.
///
/// Callers must not mutate the tree between the two phases; running the whole
/// pass through this function guarantees it.
pub fn layout(
    root: &mut dyn Visual,
    anchor: Point,
    text_measurer: &dyn TextMeasurer,
) -> LayoutResult<Size> {
    let span = debug_span!("layout_pass", kind = ?root.kind());
    let _guard = span.enter();

    let context = MeasureContext::new(text_measurer);
    let size = root.measure(&context)?.validate(root.kind().name())?;
    root.arrange(anchor)?;

    debug!(
        x = anchor.x,
        y = anchor.y,
        width = size.width,
        height = size.height,
        "layout pass complete"
    );
    Ok(size)
}

/// Flattens an arranged tree into draw primitives.
pub fn build_frame(root: &dyn Visual) -> LayoutResult<RenderFrame> {
    let placement = root
        .placement()
        .ok_or(LayoutError::ArrangeBeforeMeasure { kind: root.kind() })?;
    let mut frame = RenderFrame::new(placement.size);
    root.paint(&mut frame);
    Ok(frame)
}

/// Builds the frame of an arranged tree and hands it to `renderer`.
pub fn render<R: Renderer + ?Sized>(root: &dyn Visual, renderer: &mut R) -> LayoutResult<()> {
    let frame = build_frame(root)?;
    debug!(
        rects = frame.rects.len(),
        texts = frame.texts.len(),
        "rendering arranged frame"
    );
    renderer.render(&frame)
}
