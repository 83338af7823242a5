//! Flow/stack box: packs children along a main axis, wrapping into extra
//! lines past an optional maximum extent and aligning them on the cross axis.

use std::any::Any;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Alignment, Orientation, Padding, Point, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{
    LayoutItem, LinePacking, MeasureContext, Placement, Visual, VisualKind, VisualSnapshot,
    pack_lines,
};
use crate::render::RenderFrame;

/// Serializable stack settings, validated when handed to a [`StackLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackLayoutConfig {
    pub orientation: Orientation,
    pub padding: Padding,
    /// Wrap threshold of horizontal stacks, content box only.
    pub max_width: Option<f64>,
    /// Wrap threshold of vertical stacks, content box only.
    pub max_height: Option<f64>,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
}

impl Default for StackLayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            padding: Padding::default(),
            max_width: None,
            max_height: None,
            horizontal_alignment: Alignment::Middle,
            vertical_alignment: Alignment::Middle,
        }
    }
}

impl StackLayoutConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }

    #[must_use]
    pub fn with_horizontal_alignment(mut self, alignment: Alignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_vertical_alignment(mut self, alignment: Alignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn validate(self) -> LayoutResult<Self> {
        self.padding.validate()?;
        for (name, value) in [("max_width", self.max_width), ("max_height", self.max_height)] {
            if let Some(value) = value {
                // +inf is accepted and means "no wrapping".
                if value.is_nan() || value < 0.0 {
                    return Err(LayoutError::InvalidConfig(format!(
                        "stack `{name}` must be >= 0 when set"
                    )));
                }
            }
        }
        Ok(self)
    }

    /// Wrap threshold along the packing axis.
    #[must_use]
    pub fn max_main_extent(&self) -> Option<f64> {
        match self.orientation {
            Orientation::Horizontal => self.max_width,
            Orientation::Vertical => self.max_height,
        }
    }

    /// Alignment of items inside their line. The main-axis alignment has no
    /// effect on a stack: every line starts at the content origin.
    #[must_use]
    pub fn cross_alignment(&self) -> Alignment {
        match self.orientation {
            Orientation::Horizontal => self.vertical_alignment,
            Orientation::Vertical => self.horizontal_alignment,
        }
    }
}

#[derive(Debug, Default)]
pub struct StackLayout {
    config: StackLayoutConfig,
    items: Vec<LayoutItem>,
    measured: Option<Size>,
    origin: Option<Point>,
}

impl StackLayout {
    pub fn new(config: StackLayoutConfig) -> LayoutResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn horizontal() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn vertical() -> Self {
        Self {
            config: StackLayoutConfig::new(Orientation::Vertical),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> StackLayoutConfig {
        self.config
    }

    pub fn set_config(&mut self, config: StackLayoutConfig) -> LayoutResult<()> {
        self.config = config.validate()?;
        self.invalidate();
        Ok(())
    }

    pub fn push(&mut self, visual: impl Visual + 'static) {
        self.items.push(LayoutItem::new(visual));
        self.invalidate();
    }

    pub fn push_boxed(&mut self, visual: Box<dyn Visual>) {
        self.items.push(LayoutItem::from_boxed(visual));
        self.invalidate();
    }

    #[must_use]
    pub fn with_child(mut self, visual: impl Visual + 'static) -> Self {
        self.push(visual);
        self
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Visual>> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.invalidate();
        Some(item.into_visual())
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.invalidate();
    }

    #[must_use]
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Mutable access to one child; the stack must be measured again afterwards.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut dyn Visual> {
        self.invalidate();
        self.items.get_mut(index).map(LayoutItem::visual_mut)
    }

    /// Typed mutable access to one child, `None` when out of range or of
    /// another type. The stack must be measured again afterwards.
    pub fn child_mut_as<T: Visual + 'static>(&mut self, index: usize) -> Option<&mut T> {
        self.invalidate();
        self.items.get_mut(index)?.downcast_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line packing of the last measured pass.
    pub fn lines(&self) -> LayoutResult<LinePacking> {
        self.ensure_measured()?;
        let sizes = self.item_sizes()?;
        Ok(pack_lines(
            &sizes,
            self.config.orientation,
            self.config.max_main_extent(),
        ))
    }

    fn invalidate(&mut self) {
        self.measured = None;
        self.origin = None;
    }

    fn ensure_measured(&self) -> LayoutResult<Size> {
        self.measured.ok_or_else(|| {
            warn!("stack used before measure");
            LayoutError::ArrangeBeforeMeasure {
                kind: VisualKind::Stack,
            }
        })
    }

    fn item_sizes(&self) -> LayoutResult<Vec<Size>> {
        self.items.iter().map(LayoutItem::measured_size).collect()
    }
}

impl Visual for StackLayout {
    fn kind(&self) -> VisualKind {
        VisualKind::Stack
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn measure(&mut self, context: &MeasureContext<'_>) -> LayoutResult<Size> {
        self.invalidate();
        let sizes = self
            .items
            .iter_mut()
            .map(|item| item.measure(context))
            .collect::<LayoutResult<Vec<_>>>()?;

        let orientation = self.config.orientation;
        let packing = pack_lines(&sizes, orientation, self.config.max_main_extent());
        let size = packing.content_size(orientation).padded(self.config.padding);
        debug!(
            items = sizes.len(),
            lines = packing.len(),
            width = size.width,
            height = size.height,
            "measured stack layout"
        );

        self.measured = Some(size);
        Ok(size)
    }

    fn arrange(&mut self, anchor: Point) -> LayoutResult<()> {
        self.ensure_measured()?;
        let orientation = self.config.orientation;
        let sizes = self.item_sizes()?;
        let packing = pack_lines(&sizes, orientation, self.config.max_main_extent());
        let cross_alignment = self.config.cross_alignment();
        let content_origin = anchor + self.config.padding.top_left();

        let mut cross_cursor = 0.0;
        for line in packing.lines() {
            let mut main_cursor = 0.0;
            for index in line.items() {
                let size = sizes[index];
                let cross = cross_cursor
                    + cross_alignment.offset(line.cross_extent, size.cross(orientation));
                let position = content_origin + Point::from_axes(orientation, main_cursor, cross);
                self.items[index].arrange(position)?;
                main_cursor += size.main(orientation);
            }
            cross_cursor += line.cross_extent;
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
            self.items.iter().map(|item| item.visual().snapshot()).collect(),
        )
    }

    fn paint(&self, frame: &mut RenderFrame) {
        for item in &self.items {
            item.visual().paint(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StackLayout, StackLayoutConfig};
    use crate::core::{Alignment, HeuristicTextMeasurer, Orientation, Padding, Point, Size};
    use crate::error::LayoutError;
    use crate::layout::{MeasureContext, Rectangle, Visual};

    fn context() -> MeasureContext<'static> {
        MeasureContext::new(&HeuristicTextMeasurer)
    }

    #[test]
    fn empty_stack_measures_to_padding() {
        let config = StackLayoutConfig::default().with_padding(Padding::new(1.0, 2.0, 3.0, 4.0));
        let mut stack = StackLayout::new(config).expect("stack");
        assert_eq!(stack.measure(&context()).expect("measure"), Size::new(4.0, 6.0));
        stack.arrange(Point::new(5.0, 5.0)).expect("arrange");
    }

    #[test]
    fn config_rejects_negative_wrap_threshold() {
        let config = StackLayoutConfig::default().with_max_width(-1.0);
        assert!(matches!(
            StackLayout::new(config),
            Err(LayoutError::InvalidConfig(_))
        ));
        let config = StackLayoutConfig::default().with_max_height(f64::NAN);
        assert!(StackLayout::new(config).is_err());
    }

    #[test]
    fn arrange_requires_measure_after_mutation() {
        let mut stack = StackLayout::horizontal().with_child(Rectangle::new(Size::new(1.0, 1.0)));
        stack.measure(&context()).expect("measure");
        stack.push(Rectangle::new(Size::new(2.0, 2.0)));
        let err = stack.arrange(Point::ORIGIN).expect_err("stale measure");
        assert!(matches!(err, LayoutError::ArrangeBeforeMeasure { .. }));
    }

    #[test]
    fn vertical_stack_aligns_items_horizontally() {
        let config = StackLayoutConfig::new(Orientation::Vertical)
            .with_horizontal_alignment(Alignment::End);
        let mut stack = StackLayout::new(config)
            .expect("stack")
            .with_child(Rectangle::new(Size::new(20.0, 5.0)))
            .with_child(Rectangle::new(Size::new(8.0, 5.0)));
        let size = stack.measure(&context()).expect("measure");
        assert_eq!(size, Size::new(20.0, 10.0));
        stack.arrange(Point::ORIGIN).expect("arrange");
        assert_eq!(stack.items()[0].position(), Some(Point::new(0.0, 0.0)));
        assert_eq!(stack.items()[1].position(), Some(Point::new(12.0, 5.0)));
    }

    #[test]
    fn shorter_wrapped_line_starts_at_content_origin() {
        for alignment in [Alignment::Start, Alignment::Middle, Alignment::End] {
            let config = StackLayoutConfig::default()
                .with_max_width(20.0)
                .with_horizontal_alignment(alignment);
            let mut stack = StackLayout::new(config)
                .expect("stack")
                .with_child(Rectangle::new(Size::new(20.0, 4.0)))
                .with_child(Rectangle::new(Size::new(10.0, 4.0)));
            stack.measure(&context()).expect("measure");
            stack.arrange(Point::new(100.0, 200.0)).expect("arrange");
            assert_eq!(stack.items()[1].position(), Some(Point::new(100.0, 204.0)));
        }
    }

    #[test]
    fn remove_invalidates_measurement() {
        let mut stack = StackLayout::horizontal()
            .with_child(Rectangle::new(Size::new(1.0, 1.0)))
            .with_child(Rectangle::new(Size::new(2.0, 1.0)));
        stack.measure(&context()).expect("measure");
        assert!(stack.remove(0).is_some());
        assert!(stack.remove(5).is_none());
        assert!(stack.lines().is_err());
        assert_eq!(stack.measure(&context()).expect("measure"), Size::new(2.0, 1.0));
    }
}
