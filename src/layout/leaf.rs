use std::any::Any;

use crate::core::{Point, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{MeasureContext, Placement, Visual, VisualKind};
use crate::render::{Color, RectPrimitive, RenderFrame, TextPrimitive};

/// Fixed-size box, optionally filled when painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    size: Size,
    fill: Option<Color>,
    measured: Option<Size>,
    origin: Option<Point>,
}

impl Rectangle {
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            fill: None,
            measured: None,
            origin: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.measured = None;
        self.origin = None;
    }

    #[must_use]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }
}

impl Visual for Rectangle {
    fn kind(&self) -> VisualKind {
        VisualKind::Rectangle
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn measure(&mut self, _context: &MeasureContext<'_>) -> LayoutResult<Size> {
        let size = self.size.validate("rectangle")?;
        self.measured = Some(size);
        Ok(size)
    }

    fn arrange(&mut self, anchor: Point) -> LayoutResult<()> {
        if self.measured.is_none() {
            return Err(LayoutError::ArrangeBeforeMeasure { kind: self.kind() });
        }
        self.origin = Some(anchor);
        Ok(())
    }

    fn placement(&self) -> Option<Placement> {
        Some(Placement::new(self.origin?, self.measured?))
    }

    fn paint(&self, frame: &mut RenderFrame) {
        if let (Some(fill), Some(placement)) = (self.fill, self.placement()) {
            frame.push_rect(RectPrimitive::new(placement.origin, placement.size, fill));
        }
    }
}

/// Text label whose box comes from the pass's [`TextMeasurer`](crate::core::TextMeasurer).
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font_size_px: f64,
    color: Color,
    measured: Option<Size>,
    origin: Option<Point>,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, font_size_px: f64) -> Self {
        Self {
            text: text.into(),
            font_size_px,
            color: Color::BLACK,
            measured: None,
            origin: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.measured = None;
        self.origin = None;
    }

    #[must_use]
    pub fn font_size_px(&self) -> f64 {
        self.font_size_px
    }
}

impl Visual for Label {
    fn kind(&self) -> VisualKind {
        VisualKind::Label
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn measure(&mut self, context: &MeasureContext<'_>) -> LayoutResult<Size> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(LayoutError::InvalidConfig(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        let size = context
            .text_measurer()
            .measure(&self.text, self.font_size_px)
            .validate("label")?;
        self.measured = Some(size);
        Ok(size)
    }

    fn arrange(&mut self, anchor: Point) -> LayoutResult<()> {
        if self.measured.is_none() {
            return Err(LayoutError::ArrangeBeforeMeasure { kind: self.kind() });
        }
        self.origin = Some(anchor);
        Ok(())
    }

    fn placement(&self) -> Option<Placement> {
        Some(Placement::new(self.origin?, self.measured?))
    }

    fn paint(&self, frame: &mut RenderFrame) {
        // Empty labels still take part in layout but have nothing to draw.
        if self.text.is_empty() {
            return;
        }
        if let Some(placement) = self.placement() {
            frame.push_text(TextPrimitive::new(
                self.text.clone(),
                placement.origin,
                self.font_size_px,
                self.color,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Label, Rectangle};
    use crate::core::{FixedTextMeasurer, HeuristicTextMeasurer, Point, Size};
    use crate::error::LayoutError;
    use crate::layout::{MeasureContext, Visual};

    #[test]
    fn rectangle_reports_author_size() {
        let mut rect = Rectangle::new(Size::new(15.0, 25.0));
        let context = MeasureContext::new(&HeuristicTextMeasurer);
        assert_eq!(rect.measure(&context).expect("measure"), Size::new(15.0, 25.0));
        rect.arrange(Point::new(3.0, 4.0)).expect("arrange");
        let placement = rect.placement().expect("placement");
        assert_eq!(placement.origin, Point::new(3.0, 4.0));
    }

    #[test]
    fn rectangle_arrange_without_measure_fails() {
        let mut rect = Rectangle::new(Size::new(1.0, 1.0));
        let err = rect.arrange(Point::ORIGIN).expect_err("must fail");
        assert!(matches!(err, LayoutError::ArrangeBeforeMeasure { .. }));
    }

    #[test]
    fn resizing_rectangle_clears_previous_pass() {
        let mut rect = Rectangle::new(Size::new(1.0, 1.0));
        let context = MeasureContext::new(&HeuristicTextMeasurer);
        rect.measure(&context).expect("measure");
        rect.arrange(Point::ORIGIN).expect("arrange");
        rect.set_size(Size::new(2.0, 2.0));
        assert!(rect.placement().is_none());
        assert!(rect.arrange(Point::ORIGIN).is_err());
    }

    #[test]
    fn label_uses_text_measurer() {
        let measurer = FixedTextMeasurer(Size::new(42.0, 12.0));
        let mut label = Label::new("volume", 11.0);
        let size = label
            .measure(&MeasureContext::new(&measurer))
            .expect("measure");
        assert_eq!(size, Size::new(42.0, 12.0));
    }

    #[test]
    fn label_rejects_invalid_font_size_and_measurement() {
        let mut label = Label::new("x", 0.0);
        assert!(label
            .measure(&MeasureContext::new(&HeuristicTextMeasurer))
            .is_err());

        let broken = FixedTextMeasurer(Size::new(f64::NAN, 1.0));
        let mut label = Label::new("x", 10.0);
        let err = label
            .measure(&MeasureContext::new(&broken))
            .expect_err("nan width");
        assert!(matches!(err, LayoutError::InvalidMeasurement(_)));
    }
}
