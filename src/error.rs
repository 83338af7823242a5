use thiserror::Error;

use crate::layout::VisualKind;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("{kind:?} arranged before it was measured in this pass")]
    ArrangeBeforeMeasure { kind: VisualKind },

    #[error("invalid render primitive: {0}")]
    InvalidPrimitive(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
