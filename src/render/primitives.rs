use serde::{Deserialize, Serialize};

use crate::core::{Point, Size};
use crate::error::{LayoutError, LayoutResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> LayoutResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LayoutError::InvalidPrimitive(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Filled axis-aligned box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub origin: Point,
    pub size: Size,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(origin: Point, size: Size, fill: Color) -> Self {
        Self { origin, size, fill }
    }

    pub fn validate(self) -> LayoutResult<()> {
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(LayoutError::InvalidPrimitive(
                "rect origin must be finite".to_owned(),
            ));
        }
        self.size
            .validate("rect")
            .map_err(|err| LayoutError::InvalidPrimitive(err.to_string()))?;
        self.fill.validate()
    }
}

/// One label whose top-left corner sits at `origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub origin: Point,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, origin: Point, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            origin,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.text.is_empty() {
            return Err(LayoutError::InvalidPrimitive(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(LayoutError::InvalidPrimitive(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(LayoutError::InvalidPrimitive(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
