use crate::core::Size;
use crate::error::{LayoutError, LayoutResult};
use crate::render::{RectPrimitive, TextPrimitive};

/// Backend-agnostic scene built from one arranged visual tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: Size,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    pub fn validate(&self) -> LayoutResult<()> {
        self.bounds
            .validate("frame")
            .map_err(|err| LayoutError::InvalidPrimitive(err.to_string()))?;

        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }
}
