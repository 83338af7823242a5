use crate::core::Size;

/// External text measurement collaborator.
///
/// Layout never shapes text itself: label visuals ask the measurer for a
/// bounding box during the measure phase. Hosts plug in their shaping backend;
/// headless callers can use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> Size;
}

/// Rough measurer assuming a 0.6 em average glyph width and a 1 em line box.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> Size {
        let width = 0.6 * font_size_px * text.chars().count() as f64;
        Size::new(width, font_size_px)
    }
}

/// Measurer returning the same box for every string. Useful for fixtures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTextMeasurer(pub Size);

impl TextMeasurer for FixedTextMeasurer {
    fn measure(&self, _text: &str, _font_size_px: f64) -> Size {
        self.0
    }
}
