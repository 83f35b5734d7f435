use crate::config::LayoutConfig;
use crate::output::{CellLayout, RowLayout, TableLayout};
use tabulon_model::{Row, Table};
use tabulon_surface::{DrawingSurface, SurfaceError};

/// Computes row heights and cell geometry for a table.
///
/// Layout is a pure function of the table and the surface's text metrics:
/// running it twice on the same inputs yields identical results. The surface
/// is only asked to measure, never to draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn layout<'t, S>(&self, table: &'t Table, surface: &S) -> Result<TableLayout<'t>, SurfaceError>
    where
        S: DrawingSurface + ?Sized,
    {
        let column_widths: Vec<f32> = table.column_widths().collect();

        let mut rows = Vec::with_capacity(table.rows().len());
        for (index, row) in table.rows().iter().enumerate() {
            let row_layout = self.layout_row(table, row, &column_widths, surface)?;
            log::trace!("Row {} height {:.2}", index, row_layout.height);
            rows.push(row_layout);
        }

        let height = rows.iter().map(|r| r.height).sum();
        let width = column_widths.iter().sum();
        log::debug!(
            "Laid out table: {} rows, {:.2} x {:.2}",
            rows.len(),
            width,
            height
        );

        Ok(TableLayout {
            rows,
            width,
            height,
        })
    }

    fn layout_row<'t, S>(
        &self,
        table: &'t Table,
        row: &'t Row,
        column_widths: &[f32],
        surface: &S,
    ) -> Result<RowLayout<'t>, SurfaceError>
    where
        S: DrawingSurface + ?Sized,
    {
        let mut cells = Vec::with_capacity(row.cells().len());
        let mut col_cursor: usize = 0;
        let mut x_cursor = 0.0;
        let mut max_height: f32 = 0.0;

        for cell in row.cells() {
            // Spans were validated against the column count when the table was built.
            let end_col = col_cursor.saturating_add(cell.span()).min(column_widths.len());
            let width: f32 = column_widths[col_cursor..end_col].iter().sum();

            let style = table.style_chain(row, cell).resolve();
            let text_width = surface.text_width(cell.text(), &style.font, style.font_size)?;
            let metrics = surface.line_metrics(&style.font, style.font_size)?;

            let borders = cell.border_widths();
            let required_height = metrics.line_height()
                + 2.0 * self.config.vertical_padding
                + borders.max_horizontal_edge();
            let text_offset =
                cell.alignment()
                    .offset(width, text_width, self.config.horizontal_padding);
            let baseline_offset = borders.bottom + self.config.vertical_padding + metrics.descent;

            max_height = max_height.max(required_height);
            cells.push(CellLayout {
                cell,
                start_column: col_cursor,
                x_offset: x_cursor,
                width,
                text_width,
                text_offset,
                metrics,
                baseline_offset,
                required_height,
                style,
            });

            col_cursor = end_col;
            x_cursor += width;
        }

        Ok(RowLayout {
            height: max_height,
            cells,
        })
    }
}
