//! Measure/arrange layout engine for composite chart visuals.
//!
//! Every visual implements [`Visual`]. A pass first measures the tree
//! bottom-up (containers measure their children before applying their own
//! sizing rule), then arranges it top-down from an anchor point.

mod item;
mod leaf;
mod line_packer;
mod pass;
mod relative;
mod snapshot;
mod stack;
mod table;
mod visual;

pub use item::LayoutItem;
pub use leaf::{Label, Rectangle};
pub use line_packer::{Line, LinePacking, pack_lines};
pub use pass::{build_frame, layout, render};
pub use relative::RelativePanel;
pub use snapshot::VisualSnapshot;
pub use stack::{StackLayout, StackLayoutConfig};
pub use table::{
    CellAlignment, GridAddress, GridRealization, GridTrack, TableLayout, TableLayoutConfig,
};
pub use visual::{MeasureContext, Placement, Visual, VisualKind};
