use std::any::Any;

use tracing::trace;

use crate::core::{Point, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{
    LayoutItem, MeasureContext, Placement, Visual, VisualKind, VisualSnapshot,
};
use crate::render::RenderFrame;

#[derive(Debug)]
struct RelativeChild {
    offset: Point,
    item: LayoutItem,
}

/// Container whose children keep author offsets from the panel anchor.
///
/// The panel reports the author-supplied size; children are measured only so
/// nested containers are ready to arrange.
#[derive(Debug)]
pub struct RelativePanel {
    size: Size,
    children: Vec<RelativeChild>,
    measured: Option<Size>,
    origin: Option<Point>,
}

impl RelativePanel {
    pub fn new(size: Size) -> LayoutResult<Self> {
        Ok(Self {
            size: validate_panel_size(size)?,
            children: Vec::new(),
            measured: None,
            origin: None,
        })
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) -> LayoutResult<()> {
        self.size = validate_panel_size(size)?;
        self.invalidate();
        Ok(())
    }

    pub fn push(&mut self, offset: Point, visual: impl Visual + 'static) {
        self.push_boxed(offset, Box::new(visual));
    }

    pub fn push_boxed(&mut self, offset: Point, visual: Box<dyn Visual>) {
        self.children.push(RelativeChild {
            offset,
            item: LayoutItem::from_boxed(visual),
        });
        self.invalidate();
    }

    #[must_use]
    pub fn with_child(mut self, offset: Point, visual: impl Visual + 'static) -> Self {
        self.push(offset, visual);
        self
    }

    pub fn set_offset(&mut self, index: usize, offset: Point) -> bool {
        let Some(child) = self.children.get_mut(index) else {
            return false;
        };
        child.offset = offset;
        self.invalidate();
        true
    }

    #[must_use]
    pub fn offset(&self, index: usize) -> Option<Point> {
        self.children.get(index).map(|child| child.offset)
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Option<&LayoutItem> {
        self.children.get(index).map(|child| &child.item)
    }

    pub fn child_mut_as<T: Visual + 'static>(&mut self, index: usize) -> Option<&mut T> {
        self.invalidate();
        self.children.get_mut(index)?.item.downcast_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn invalidate(&mut self) {
        self.measured = None;
        self.origin = None;
    }
}

fn validate_panel_size(size: Size) -> LayoutResult<Size> {
    size.validate("relative panel")
        .map_err(|err| LayoutError::InvalidConfig(err.to_string()))
}

impl Visual for RelativePanel {
    fn kind(&self) -> VisualKind {
        VisualKind::Relative
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn measure(&mut self, context: &MeasureContext<'_>) -> LayoutResult<Size> {
        self.invalidate();
        for child in &mut self.children {
            child.item.measure(context)?;
        }
        trace!(
            children = self.children.len(),
            width = self.size.width,
            height = self.size.height,
            "measured relative panel"
        );
        self.measured = Some(self.size);
        Ok(self.size)
    }

    fn arrange(&mut self, anchor: Point) -> LayoutResult<()> {
        if self.measured.is_none() {
            return Err(LayoutError::ArrangeBeforeMeasure { kind: self.kind() });
        }
        for child in &mut self.children {
            child.item.arrange(anchor + child.offset)?;
        }
        self.origin = Some(anchor);
        Ok(())
    }

    fn placement(&self) -> Option<Placement> {
        Some(Placement::new(self.origin?, self.measured?))
    }

    fn snapshot(&self) -> VisualSnapshot {
        VisualSnapshot::container(
            self.kind(),
            self.placement(),
            self.children
                .iter()
                .map(|child| child.item.visual().snapshot())
                .collect(),
        )
    }

    fn paint(&self, frame: &mut RenderFrame) {
        for child in &self.children {
            child.item.visual().paint(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RelativePanel;
    use crate::core::{HeuristicTextMeasurer, Point, Size};
    use crate::layout::{MeasureContext, Rectangle, Visual};

    #[test]
    fn panel_reports_author_size_not_child_envelope() {
        let mut panel = RelativePanel::new(Size::new(10.0, 10.0))
            .expect("panel")
            .with_child(Point::new(40.0, 0.0), Rectangle::new(Size::new(30.0, 30.0)));
        let size = panel
            .measure(&MeasureContext::new(&HeuristicTextMeasurer))
            .expect("measure");
        assert_eq!(size, Size::new(10.0, 10.0));
    }

    #[test]
    fn children_are_translated_by_anchor() {
        let mut panel = RelativePanel::new(Size::new(50.0, 50.0))
            .expect("panel")
            .with_child(Point::new(5.0, 7.0), Rectangle::new(Size::new(1.0, 1.0)))
            .with_child(Point::new(-2.0, 0.0), Rectangle::new(Size::new(1.0, 1.0)));
        panel
            .measure(&MeasureContext::new(&HeuristicTextMeasurer))
            .expect("measure");
        panel.arrange(Point::new(100.0, 200.0)).expect("arrange");
        assert_eq!(
            panel.child(0).and_then(|child| child.position()),
            Some(Point::new(105.0, 207.0))
        );
        assert_eq!(
            panel.child(1).and_then(|child| child.position()),
            Some(Point::new(98.0, 200.0))
        );
    }

    #[test]
    fn invalid_panel_size_is_a_config_error() {
        assert!(RelativePanel::new(Size::new(-1.0, 0.0)).is_err());
        let mut panel = RelativePanel::new(Size::ZERO).expect("panel");
        assert!(panel.set_size(Size::new(f64::NAN, 1.0)).is_err());
        assert!(!panel.set_offset(3, Point::ORIGIN));
    }
}
