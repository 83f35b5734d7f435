use thiserror::Error;

/// Configuration errors, raised by [`crate::TableBuilder::build`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Table has no columns.")]
    NoColumns,
    #[error("Column {index} has width {width}; column widths must be positive.")]
    InvalidColumnWidth { index: usize, width: f32 },
    #[error("Missing required table style: {0}.")]
    MissingRequiredStyle(&'static str),
    #[error("Font size {0} is invalid; font sizes must be positive.")]
    InvalidFontSize(f32),
    #[error("Cell {cell} in row {row} spans zero columns.")]
    ZeroSpan { row: usize, cell: usize },
    #[error("Cell {cell} in row {row} has border width {width}; border widths must be non-negative.")]
    InvalidBorderWidth { row: usize, cell: usize, width: f32 },
    #[error("Row {row} spans {span_sum} columns, but the table has {columns}.")]
    RowSpanMismatch {
        row: usize,
        span_sum: usize,
        columns: usize,
    },
}
