pub mod alignment;
pub mod geometry;
pub mod text;

pub use alignment::{Alignment, Orientation};
pub use geometry::{Padding, Point, Size};
pub use text::{FixedTextMeasurer, HeuristicTextMeasurer, TextMeasurer};
