//! Sparse cell grid of one worksheet

use ahash::AHashMap;

use crate::cell::{CellCoordinate, CellRecord, MergeSpan};

/// Extent of a table: every row in `1..=max_row`, every column in `1..=max_column`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridBounds {
    pub max_row: u32,
    pub max_column: u32,
}

impl GridBounds {
    /// Grow the bounds so they include a coordinate
    pub fn including(self, coord: CellCoordinate) -> Self {
        Self {
            max_row: self.max_row.max(coord.row),
            max_column: self.max_column.max(coord.column),
        }
    }

    /// Smallest bounds containing both
    pub fn union(self, other: GridBounds) -> Self {
        Self {
            max_row: self.max_row.max(other.max_row),
            max_column: self.max_column.max(other.max_column),
        }
    }

    /// True when there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.max_row == 0 || self.max_column == 0
    }

    /// Check if a coordinate lies within the bounds
    pub fn contains(&self, coord: CellCoordinate) -> bool {
        coord.row >= 1
            && coord.column >= 1
            && coord.row <= self.max_row
            && coord.column <= self.max_column
    }
}

/// Sparse mapping from coordinate to cell record
///
/// Absent coordinates are empty cells. Bounds are computed from the records
/// and the merge span corners that were added; the worksheet's declared
/// `<dimension>` is kept only as a hint.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    cells: AHashMap<CellCoordinate, CellRecord>,
    bounds: GridBounds,
    dimension_hint: Option<MergeSpan>,
}

impl SheetGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record at the same coordinate
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, record: CellRecord) -> Option<CellRecord> {
        self.bounds = self.bounds.including(record.coordinate);
        self.cells.insert(record.coordinate, record)
    }

    /// Extend the bounds to cover a merge span
    pub fn include_span(&mut self, span: &MergeSpan) {
        self.bounds = self.bounds.including(span.bottom_right);
    }

    /// Record the declared `<dimension ref>` of the worksheet
    pub fn set_dimension_hint(&mut self, hint: MergeSpan) {
        self.dimension_hint = Some(hint);
    }

    /// Declared dimension, if the worksheet had one
    pub fn dimension_hint(&self) -> Option<&MergeSpan> {
        self.dimension_hint.as_ref()
    }

    /// Get the record at a coordinate
    pub fn get(&self, coord: CellCoordinate) -> Option<&CellRecord> {
        self.cells.get(&coord)
    }

    /// Computed bounds
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn max_row(&self) -> u32 {
        self.bounds.max_row
    }

    pub fn max_column(&self) -> u32 {
        self.bounds.max_column
    }

    /// Number of materialized records
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over records in no particular order
    pub fn records(&self) -> impl Iterator<Item = &CellRecord> {
        self.cells.values()
    }
}
