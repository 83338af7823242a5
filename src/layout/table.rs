//! Sparse grid layout.
//!
//! Cells are addressed by arbitrary `(row, column)` indices. Only indices with
//! at least one occupied cell are realized; gaps between index values take no
//! space.

use std::any::Any;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Alignment, Padding, Point, Size};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{
    LayoutItem, MeasureContext, Placement, Visual, VisualKind, VisualSnapshot,
};
use crate::render::RenderFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridAddress {
    pub row: usize,
    pub column: usize,
}

impl GridAddress {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Placement of an item inside a cell larger than itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellAlignment {
    pub horizontal: Alignment,
    pub vertical: Alignment,
}

impl CellAlignment {
    #[must_use]
    pub const fn new(horizontal: Alignment, vertical: Alignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub const fn centered() -> Self {
        Self::new(Alignment::Middle, Alignment::Middle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayoutConfig {
    pub padding: Padding,
    /// Placement of the whole table box relative to the anchor.
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
}

impl TableLayoutConfig {
    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn validate(self) -> LayoutResult<Self> {
        self.padding.validate()?;
        Ok(self)
    }
}

/// A realized row or column: its sparse index plus compacted geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTrack {
    pub index: usize,
    /// Exclusive prefix sum of the extents of earlier realized tracks.
    pub offset: f64,
    pub extent: f64,
}

/// Realized rows and columns of one pass, both sorted by index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridRealization {
    pub rows: Vec<GridTrack>,
    pub columns: Vec<GridTrack>,
}

impl GridRealization {
    /// Realizes tracks from occupied cells and their measured sizes.
    pub fn from_cells(cells: impl IntoIterator<Item = (GridAddress, Size)>) -> Self {
        let mut row_extents = BTreeMap::<usize, f64>::new();
        let mut column_extents = BTreeMap::<usize, f64>::new();
        for (address, size) in cells {
            let row = row_extents.entry(address.row).or_insert(0.0);
            *row = row.max(size.height);
            let column = column_extents.entry(address.column).or_insert(0.0);
            *column = column.max(size.width);
        }

        Self {
            rows: compact_tracks(row_extents),
            columns: compact_tracks(column_extents),
        }
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<GridTrack> {
        find_track(&self.rows, index)
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<GridTrack> {
        find_track(&self.columns, index)
    }

    /// Row and column tracks of an occupied cell.
    pub fn cell(&self, address: GridAddress) -> LayoutResult<(GridTrack, GridTrack)> {
        match (self.row(address.row), self.column(address.column)) {
            (Some(row), Some(column)) => Ok((row, column)),
            _ => Err(LayoutError::InvalidMeasurement(format!(
                "cell ({}, {}) is not part of the realized grid",
                address.row, address.column
            ))),
        }
    }

    #[must_use]
    pub fn row_indices(&self) -> Vec<usize> {
        self.rows.iter().map(|track| track.index).collect()
    }

    #[must_use]
    pub fn column_indices(&self) -> Vec<usize> {
        self.columns.iter().map(|track| track.index).collect()
    }

    /// Sum of realized column widths and row heights, padding excluded.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(
            self.columns.iter().map(|track| track.extent).sum(),
            self.rows.iter().map(|track| track.extent).sum(),
        )
    }
}

fn compact_tracks(extents: BTreeMap<usize, f64>) -> Vec<GridTrack> {
    let mut offset = 0.0;
    extents
        .into_iter()
        .map(|(index, extent)| {
            let track = GridTrack {
                index,
                offset,
                extent,
            };
            offset += extent;
            track
        })
        .collect()
}

fn find_track(tracks: &[GridTrack], index: usize) -> Option<GridTrack> {
    tracks
        .binary_search_by_key(&index, |track| track.index)
        .ok()
        .map(|position| tracks[position])
}

#[derive(Debug)]
struct TableCell {
    item: LayoutItem,
    alignment: CellAlignment,
}

#[derive(Debug, Default)]
pub struct TableLayout {
    config: TableLayoutConfig,
    cells: IndexMap<GridAddress, TableCell>,
    measured: Option<Size>,
    origin: Option<Point>,
}

impl TableLayout {
    pub fn new(config: TableLayoutConfig) -> LayoutResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> TableLayoutConfig {
        self.config
    }

    pub fn set_config(&mut self, config: TableLayoutConfig) -> LayoutResult<()> {
        self.config = config.validate()?;
        self.invalidate();
        Ok(())
    }

    /// Places `visual` at `address` with start alignment inside the cell.
    ///
    /// An occupied address is overwritten: the last write wins and the
    /// previous occupant is returned.
    pub fn insert(
        &mut self,
        address: GridAddress,
        visual: impl Visual + 'static,
    ) -> Option<Box<dyn Visual>> {
        self.insert_aligned(address, visual, CellAlignment::default())
    }

    pub fn insert_aligned(
        &mut self,
        address: GridAddress,
        visual: impl Visual + 'static,
        alignment: CellAlignment,
    ) -> Option<Box<dyn Visual>> {
        self.insert_boxed(address, Box::new(visual), alignment)
    }

    pub fn insert_boxed(
        &mut self,
        address: GridAddress,
        visual: Box<dyn Visual>,
        alignment: CellAlignment,
    ) -> Option<Box<dyn Visual>> {
        self.invalidate();
        let cell = TableCell {
            item: LayoutItem::from_boxed(visual),
            alignment,
        };
        let previous = self.cells.insert(address, cell)?;
        debug!(
            row = address.row,
            column = address.column,
            "table cell overwritten, last write wins"
        );
        Some(previous.item.into_visual())
    }

    #[must_use]
    pub fn with_cell(mut self, row: usize, column: usize, visual: impl Visual + 'static) -> Self {
        self.insert(GridAddress::new(row, column), visual);
        self
    }

    pub fn remove(&mut self, address: GridAddress) -> Option<Box<dyn Visual>> {
        let cell = self.cells.shift_remove(&address)?;
        self.invalidate();
        Some(cell.item.into_visual())
    }

    #[must_use]
    pub fn get(&self, address: GridAddress) -> Option<&LayoutItem> {
        self.cells.get(&address).map(|cell| &cell.item)
    }

    pub fn child_mut(&mut self, address: GridAddress) -> Option<&mut dyn Visual> {
        self.invalidate();
        self.cells
            .get_mut(&address)
            .map(|cell| cell.item.visual_mut())
    }

    pub fn child_mut_as<T: Visual + 'static>(&mut self, address: GridAddress) -> Option<&mut T> {
        self.invalidate();
        self.cells.get_mut(&address)?.item.downcast_mut()
    }

    /// Occupied addresses in first-insertion order.
    pub fn addresses(&self) -> impl Iterator<Item = GridAddress> + '_ {
        self.cells.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Realized rows and columns of the last measured pass.
    pub fn realize(&self) -> LayoutResult<GridRealization> {
        self.ensure_measured()?;
        self.realize_measured()
    }

    fn realize_measured(&self) -> LayoutResult<GridRealization> {
        let cells = self
            .cells
            .iter()
            .map(|(address, cell)| cell.item.measured_size().map(|size| (*address, size)))
            .collect::<LayoutResult<Vec<_>>>()?;
        Ok(GridRealization::from_cells(cells))
    }

    fn invalidate(&mut self) {
        self.measured = None;
        self.origin = None;
    }

    fn ensure_measured(&self) -> LayoutResult<Size> {
        self.measured.ok_or_else(|| {
            warn!("table used before measure");
            LayoutError::ArrangeBeforeMeasure {
                kind: VisualKind::Table,
            }
        })
    }
}

impl Visual for TableLayout {
    fn kind(&self) -> VisualKind {
        VisualKind::Table
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn measure(&mut self, context: &MeasureContext<'_>) -> LayoutResult<Size> {
        self.invalidate();
        for cell in self.cells.values_mut() {
            cell.item.measure(context)?;
        }

        let realization = self.realize_measured()?;
        let size = realization.content_size().padded(self.config.padding);
        debug!(
            cells = self.cells.len(),
            rows = realization.rows.len(),
            columns = realization.columns.len(),
            width = size.width,
            height = size.height,
            "measured table layout"
        );

        self.measured = Some(size);
        Ok(size)
    }

    fn arrange(&mut self, anchor: Point) -> LayoutResult<()> {
        let size = self.ensure_measured()?;
        let realization = self.realize_measured()?;
        let origin = anchor.offset(
            -self.config.horizontal_alignment.offset(size.width, 0.0),
            -self.config.vertical_alignment.offset(size.height, 0.0),
        );
        let content_origin = origin + self.config.padding.top_left();

        for (address, cell) in &mut self.cells {
            let item_size = cell.item.measured_size()?;
            let (row, column) = realization.cell(*address)?;
            let position = content_origin.offset(
                column.offset + cell.alignment.horizontal.offset(column.extent, item_size.width),
                row.offset + cell.alignment.vertical.offset(row.extent, item_size.height),
            );
            cell.item.arrange(position)?;
        }

        self.origin = Some(origin);
        Ok(())
    }

    fn placement(&self) -> Option<Placement> {
        Some(Placement::new(self.origin?, self.measured?))
    }

    fn snapshot(&self) -> VisualSnapshot {
        VisualSnapshot::container(
            self.kind(),
            self.placement(),
            self.cells
                .values()
                .map(|cell| cell.item.visual().snapshot())
                .collect(),
        )
    }

    fn paint(&self, frame: &mut RenderFrame) {
        for cell in self.cells.values() {
            cell.item.visual().paint(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellAlignment, GridAddress, GridRealization, TableLayout, TableLayoutConfig};
    use crate::core::{Alignment, HeuristicTextMeasurer, Padding, Point, Size};
    use crate::error::LayoutError;
    use crate::layout::{MeasureContext, Rectangle, Visual};

    #[test]
    fn realization_compacts_missing_indices() {
        let realization = GridRealization::from_cells([
            (GridAddress::new(3, 10), Size::new(4.0, 2.0)),
            (GridAddress::new(7, 2), Size::new(6.0, 5.0)),
        ]);
        assert_eq!(realization.row_indices(), vec![3, 7]);
        assert_eq!(realization.column_indices(), vec![2, 10]);
        assert_eq!(realization.column(10).map(|track| track.offset), Some(6.0));
        assert_eq!(realization.row(7).map(|track| track.offset), Some(2.0));
        assert!(realization.row(4).is_none());
        assert_eq!(realization.content_size(), Size::new(10.0, 7.0));
    }

    #[test]
    fn unrealized_cell_lookup_is_an_error() {
        let realization =
            GridRealization::from_cells([(GridAddress::new(1, 1), Size::new(4.0, 2.0))]);
        let (row, column) = realization.cell(GridAddress::new(1, 1)).expect("occupied");
        assert_eq!((row.index, column.index), (1, 1));
        assert!(matches!(
            realization.cell(GridAddress::new(1, 2)),
            Err(LayoutError::InvalidMeasurement(_))
        ));
    }

    #[test]
    fn cells_are_aligned_inside_larger_tracks() {
        let mut table = TableLayout::default()
            .with_cell(0, 0, Rectangle::new(Size::new(10.0, 10.0)))
            .with_cell(1, 1, Rectangle::new(Size::new(20.0, 20.0)));
        table.insert_aligned(
            GridAddress::new(1, 0),
            Rectangle::new(Size::new(4.0, 4.0)),
            CellAlignment::centered(),
        );
        table.measure(&MeasureContext::new(&HeuristicTextMeasurer)).expect("measure");
        table.arrange(Point::ORIGIN).expect("arrange");

        let centered = table.get(GridAddress::new(1, 0)).expect("cell");
        // column 0 is 10 wide, row 1 is 20 high, row 1 starts at y = 10
        assert_eq!(centered.position(), Some(Point::new(3.0, 18.0)));
    }

    #[test]
    fn table_alignment_moves_whole_box_relative_to_anchor() {
        let config = TableLayoutConfig::default()
            .with_padding(Padding::uniform(2.0))
            .with_alignment(Alignment::End, Alignment::Middle);
        let mut table = TableLayout::new(config)
            .expect("table")
            .with_cell(0, 0, Rectangle::new(Size::new(16.0, 6.0)));
        let size = table
            .measure(&MeasureContext::new(&HeuristicTextMeasurer))
            .expect("measure");
        assert_eq!(size, Size::new(20.0, 10.0));
        table.arrange(Point::new(100.0, 100.0)).expect("arrange");

        let placement = table.placement().expect("placement");
        assert_eq!(placement.origin, Point::new(80.0, 95.0));
        let cell = table.get(GridAddress::new(0, 0)).expect("cell");
        assert_eq!(cell.position(), Some(Point::new(82.0, 97.0)));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let config = TableLayoutConfig::default().with_padding(Padding::new(0.0, -2.0, 0.0, 0.0));
        assert!(TableLayout::new(config).is_err());
    }
}
