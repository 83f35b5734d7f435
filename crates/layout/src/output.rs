//! Output types from the layout engine.
//!
//! A [`TableLayout`] borrows the table it was computed from and holds every
//! number the drawer needs, so drawing performs no further measurement.

use tabulon_model::Cell;
use tabulon_style::ResolvedStyle;
use tabulon_surface::LineMetrics;

/// Geometry of one cell, relative to the table's left edge and its row's band.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout<'a> {
    pub cell: &'a Cell,
    /// Index of the first column this cell covers.
    pub start_column: usize,
    /// Distance from the table's left edge to the cell's left edge.
    pub x_offset: f32,
    /// Sum of the widths of the spanned columns.
    pub width: f32,
    pub text_width: f32,
    /// Distance from the cell's left edge to the start of the text.
    pub text_offset: f32,
    pub metrics: LineMetrics,
    /// Distance from the cell's bottom edge up to the text baseline.
    pub baseline_offset: f32,
    /// Height this cell alone would need.
    pub required_height: f32,
    pub style: ResolvedStyle,
}

impl CellLayout<'_> {
    pub fn text(&self) -> &str {
        self.cell.text()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout<'a> {
    /// Tallest required height among the row's cells; shared by all of them.
    pub height: f32,
    pub cells: Vec<CellLayout<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout<'a> {
    pub rows: Vec<RowLayout<'a>>,
    pub width: f32,
    pub height: f32,
}

impl TableLayout<'_> {
    /// Total height of the table: the sum of all row heights.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn row_heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.rows.iter().map(|row| row.height)
    }
}
