//! chart-layout: measure/arrange engine for composite chart visuals.
//!
//! Arranges measured items (rectangles, labels, nested panels) into stack,
//! wrapping, sparse-table and relative containers. Drawing, text shaping and
//! animation stay with external collaborators.

pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use error::{LayoutError, LayoutResult};
pub use layout::{StackLayout, TableLayout, Visual, layout};
