//! Greedy line packing shared by stack layouts.
//!
//! Items are never reordered: a line is always a contiguous run of the input.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Orientation, Size};

/// One row (horizontal stack) or column (vertical stack) of packed items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: usize,
    pub end: usize,
    /// Sum of the items' main-axis sizes.
    pub main_extent: f64,
    /// Largest cross-axis size among the items.
    pub cross_extent: f64,
}

impl Line {
    const fn starting_at(start: usize) -> Self {
        Self {
            start,
            end: start,
            main_extent: 0.0,
            cross_extent: 0.0,
        }
    }

    #[must_use]
    pub fn items(&self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinePacking {
    lines: SmallVec<[Line; 4]>,
}

impl LinePacking {
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Main extent of the longest line.
    #[must_use]
    pub fn main_extent(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.main_extent)
            .fold(0.0, f64::max)
    }

    /// Sum of all line cross extents.
    #[must_use]
    pub fn cross_extent(&self) -> f64 {
        self.lines.iter().map(|line| line.cross_extent).sum()
    }

    /// Tight envelope of the packed content, padding excluded.
    #[must_use]
    pub fn content_size(&self, orientation: Orientation) -> Size {
        Size::from_axes(orientation, self.main_extent(), self.cross_extent())
    }
}

/// Packs `sizes` into lines no longer than `max_main_extent`.
///
/// `None` or an infinite limit produces a single line. An item is appended to
/// the current line when the line is empty or the item still fits exactly;
/// an oversized item therefore sits alone on its own line.
#[must_use]
pub fn pack_lines(
    sizes: &[Size],
    orientation: Orientation,
    max_main_extent: Option<f64>,
) -> LinePacking {
    let limit = max_main_extent.filter(|limit| limit.is_finite());
    let mut lines: SmallVec<[Line; 4]> = SmallVec::new();
    let mut current = Line::starting_at(0);

    for (index, size) in sizes.iter().enumerate() {
        let main = size.main(orientation);
        if let Some(limit) = limit {
            if !current.is_empty() && current.main_extent + main > limit {
                trace!(
                    index,
                    line_extent = current.main_extent,
                    limit,
                    "wrapping to a new line"
                );
                lines.push(current);
                current = Line::starting_at(index);
            }
        }
        current.end = index + 1;
        current.main_extent += main;
        current.cross_extent = current.cross_extent.max(size.cross(orientation));
    }

    if !current.is_empty() {
        lines.push(current);
    }

    LinePacking { lines }
}

#[cfg(test)]
mod tests {
    use super::pack_lines;
    use crate::core::{Orientation, Size};

    fn widths(values: &[f64]) -> Vec<Size> {
        values.iter().map(|width| Size::new(*width, 10.0)).collect()
    }

    #[test]
    fn unbounded_packing_keeps_one_line() {
        let packing = pack_lines(&widths(&[50.0, 70.0, 90.0]), Orientation::Horizontal, None);
        assert_eq!(packing.len(), 1);
        assert_eq!(packing.lines()[0].items(), 0..3);
        assert_eq!(packing.main_extent(), 210.0);

        let infinite = pack_lines(
            &widths(&[50.0, 70.0]),
            Orientation::Horizontal,
            Some(f64::INFINITY),
        );
        assert_eq!(infinite.len(), 1);
    }

    #[test]
    fn exact_fit_stays_on_line_and_overflow_wraps() {
        let packing = pack_lines(&widths(&[10.0, 10.0, 0.5]), Orientation::Horizontal, Some(20.0));
        assert_eq!(packing.len(), 2);
        assert_eq!(packing.lines()[0].items(), 0..2);
        assert_eq!(packing.lines()[1].items(), 2..3);
    }

    #[test]
    fn oversized_item_is_placed_alone() {
        let packing = pack_lines(&widths(&[5.0, 40.0, 5.0]), Orientation::Horizontal, Some(20.0));
        let ranges: Vec<_> = packing.lines().iter().map(|line| line.items()).collect();
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
        assert_eq!(packing.main_extent(), 40.0);
    }

    #[test]
    fn vertical_packing_uses_heights_as_main_axis() {
        let sizes = vec![
            Size::new(4.0, 10.0),
            Size::new(6.0, 10.0),
            Size::new(3.0, 10.0),
        ];
        let packing = pack_lines(&sizes, Orientation::Vertical, Some(20.0));
        assert_eq!(packing.len(), 2);
        assert_eq!(packing.lines()[0].cross_extent, 6.0);
        assert_eq!(packing.content_size(Orientation::Vertical), Size::new(9.0, 20.0));
    }

    #[test]
    fn empty_input_has_no_lines() {
        let packing = pack_lines(&[], Orientation::Horizontal, Some(10.0));
        assert!(packing.is_empty());
        assert_eq!(packing.content_size(Orientation::Horizontal), Size::ZERO);
    }
}
