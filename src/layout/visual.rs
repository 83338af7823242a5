use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Point, Size, TextMeasurer};
use crate::error::LayoutResult;
use crate::layout::VisualSnapshot;
use crate::render::RenderFrame;

/// Closed set of visual variants known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualKind {
    Rectangle,
    Label,
    Stack,
    Table,
    Relative,
}

impl VisualKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Label => "label",
            Self::Stack => "stack",
            Self::Table => "table",
            Self::Relative => "relative panel",
        }
    }

    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Stack | Self::Table | Self::Relative)
    }
}

/// Final top-left origin and bounding size of an arranged visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub origin: Point,
    pub size: Size,
}

impl Placement {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Whether `other` lies inside this box, borders included.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Collaborators available to every visual during the measure phase.
#[derive(Clone, Copy)]
pub struct MeasureContext<'a> {
    text_measurer: &'a dyn TextMeasurer,
}

impl<'a> MeasureContext<'a> {
    #[must_use]
    pub fn new(text_measurer: &'a dyn TextMeasurer) -> Self {
        Self { text_measurer }
    }

    #[must_use]
    pub fn text_measurer(&self) -> &'a dyn TextMeasurer {
        self.text_measurer
    }
}

impl fmt::Debug for MeasureContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasureContext").finish_non_exhaustive()
    }
}

/// Two-phase layout capability shared by leaf geometry and containers.
///
/// `measure` runs bottom-up and returns the bounding size including padding.
/// `arrange` runs top-down once the size is known and writes final positions.
/// Calling `arrange` without a `measure` since the last mutation returns
/// [`LayoutError::ArrangeBeforeMeasure`](crate::error::LayoutError::ArrangeBeforeMeasure).
pub trait Visual: fmt::Debug {
    fn kind(&self) -> VisualKind;

    /// Concrete-type access, used by containers to hand out typed children.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn measure(&mut self, context: &MeasureContext<'_>) -> LayoutResult<Size>;

    fn arrange(&mut self, anchor: Point) -> LayoutResult<()>;

    /// Origin and size from the last completed pass, `None` before `arrange`.
    fn placement(&self) -> Option<Placement>;

    fn snapshot(&self) -> VisualSnapshot {
        VisualSnapshot::leaf(self.kind(), self.placement())
    }

    /// Appends drawable primitives of arranged content to `frame`.
    fn paint(&self, frame: &mut RenderFrame);
}
