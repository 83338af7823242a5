use serde::{Deserialize, Serialize};

/// Placement of a smaller extent inside a larger one along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Start,
    Middle,
    End,
}

impl Alignment {
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Middle => 0.5,
            Self::End => 1.0,
        }
    }

    /// Offset of an extent `used` inside `available`.
    ///
    /// Negative leftover space is kept as-is so an oversized item overflows
    /// symmetrically for `Middle` and towards the start for `End`.
    #[must_use]
    pub fn offset(self, available: f64, used: f64) -> f64 {
        match self {
            // Keeps `Start` exact even when `available` is infinite.
            Self::Start => 0.0,
            Self::Middle | Self::End => self.factor() * (available - used),
        }
    }
}

/// Packing axis of a stack layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
