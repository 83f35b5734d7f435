use crate::cell::Cell;
use crate::error::TableError;
use crate::row::Row;
use serde::Serialize;
use tabulon_style::{BaseStyle, Font, Side, StyleChain};
use tabulon_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Column {
    width: f32,
}

impl Column {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// A validated, immutable table.
///
/// Every row covers exactly [`Table::column_count`] columns and the
/// table-level font and font size are always present, so style resolution
/// for any cell always terminates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    font: Font,
    font_size: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_color: Option<Color>,
}

impl Table {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = f32> + '_ {
        self.columns.iter().map(Column::width)
    }

    /// Sum of all column widths.
    pub fn width(&self) -> f32 {
        self.column_widths().sum()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Table-level border color; black when unset.
    pub fn border_color(&self) -> Color {
        self.border_color.unwrap_or(Color::BLACK)
    }

    pub fn base_style(&self) -> BaseStyle<'_> {
        BaseStyle {
            font: &self.font,
            font_size: &self.font_size,
            text_color: self.text_color.as_ref(),
            border_color: self.border_color.as_ref(),
        }
    }

    /// The fallback chain for `cell`, which must belong to `row` of this table.
    pub fn style_chain<'a>(&'a self, row: &'a Row, cell: &'a Cell) -> StyleChain<'a> {
        StyleChain::new(cell.style_layer(), row.style_layer(), self.base_style())
    }
}

/// Accumulates columns, rows and table-level defaults.
///
/// All validation is deferred to [`TableBuilder::build`] so that the fluent
/// chain never has to be interrupted.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
    rows: Vec<Row>,
    font: Option<Font>,
    font_size: Option<f32>,
    border_color: Option<Color>,
    text_color: Option<Color>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn add_column_of_width(self, width: f32) -> Self {
        self.add_column(Column::new(width))
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn add_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Rows can also be appended without consuming the builder, e.g. from a loop.
    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    pub fn build(self) -> Result<Table, TableError> {
        if self.columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        for (index, column) in self.columns.iter().enumerate() {
            let width = column.width();
            if !(width.is_finite() && width > 0.0) {
                return Err(TableError::InvalidColumnWidth { index, width });
            }
        }

        let font = self.font.ok_or(TableError::MissingRequiredStyle("font"))?;
        let font_size = self
            .font_size
            .ok_or(TableError::MissingRequiredStyle("font size"))?;
        check_font_size(Some(font_size))?;

        let columns = self.columns.len();
        for (row_index, row) in self.rows.iter().enumerate() {
            validate_row(row_index, row, columns)?;
        }

        log::debug!(
            "Built table with {} columns ({:.1}pt wide) and {} rows",
            columns,
            self.columns.iter().map(Column::width).sum::<f32>(),
            self.rows.len()
        );

        Ok(Table {
            columns: self.columns,
            rows: self.rows,
            font,
            font_size,
            border_color: self.border_color,
            text_color: self.text_color,
        })
    }
}

fn check_font_size(size: Option<f32>) -> Result<(), TableError> {
    match size {
        Some(size) if !(size.is_finite() && size > 0.0) => Err(TableError::InvalidFontSize(size)),
        _ => Ok(()),
    }
}

fn validate_row(row_index: usize, row: &Row, columns: usize) -> Result<(), TableError> {
    check_font_size(row.font_size())?;

    for (cell_index, cell) in row.cells().iter().enumerate() {
        if cell.span() == 0 {
            return Err(TableError::ZeroSpan {
                row: row_index,
                cell: cell_index,
            });
        }
        check_font_size(cell.font_size())?;
        let widths = cell.border_widths();
        if let Some(width) = Side::ALL
            .into_iter()
            .map(|side| widths.get(side))
            .find(|w| !(w.is_finite() && *w >= 0.0))
        {
            return Err(TableError::InvalidBorderWidth {
                row: row_index,
                cell: cell_index,
                width,
            });
        }
    }

    let span_sum = row.span_sum();
    if span_sum != columns {
        return Err(TableError::RowSpanMismatch {
            row: row_index,
            span_sum,
            columns,
        });
    }
    Ok(())
}
