use tracing::trace;

use crate::core::{Point, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{MeasureContext, Visual};

/// A child owned by a container: the visual plus its per-pass geometry.
#[derive(Debug)]
pub struct LayoutItem {
    visual: Box<dyn Visual>,
    size: Option<Size>,
    position: Option<Point>,
}

impl LayoutItem {
    #[must_use]
    pub fn new(visual: impl Visual + 'static) -> Self {
        Self::from_boxed(Box::new(visual))
    }

    #[must_use]
    pub fn from_boxed(visual: Box<dyn Visual>) -> Self {
        Self {
            visual,
            size: None,
            position: None,
        }
    }

    #[must_use]
    pub fn visual(&self) -> &dyn Visual {
        self.visual.as_ref()
    }

    #[must_use]
    pub fn into_visual(self) -> Box<dyn Visual> {
        self.visual
    }

    /// Size from the last measure phase.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Position from the last arrange phase.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    #[must_use]
    pub fn downcast_ref<T: Visual + 'static>(&self) -> Option<&T> {
        self.visual.as_any().downcast_ref()
    }

    pub(crate) fn downcast_mut<T: Visual + 'static>(&mut self) -> Option<&mut T> {
        self.invalidate();
        self.visual.as_any_mut().downcast_mut()
    }

    pub(crate) fn visual_mut(&mut self) -> &mut dyn Visual {
        self.invalidate();
        self.visual.as_mut()
    }

    pub(crate) fn invalidate(&mut self) {
        self.size = None;
        self.position = None;
    }

    pub(crate) fn measure(&mut self, context: &MeasureContext<'_>) -> LayoutResult<Size> {
        let kind = self.visual.kind();
        let size = self.visual.measure(context)?.validate(kind.name())?;
        trace!(?kind, width = size.width, height = size.height, "measured item");
        self.size = Some(size);
        self.position = None;
        Ok(size)
    }

    pub(crate) fn measured_size(&self) -> LayoutResult<Size> {
        self.size.ok_or(LayoutError::ArrangeBeforeMeasure {
            kind: self.visual.kind(),
        })
    }

    pub(crate) fn arrange(&mut self, position: Point) -> LayoutResult<()> {
        self.visual.arrange(position)?;
        self.position = Some(position);
        Ok(())
    }
}
