use super::box_painter::{paint_background_and_borders, CellBox};
use crate::config::LayoutConfig;
use crate::engine::LayoutEngine;
use crate::output::{CellLayout, TableLayout};
use tabulon_model::Table;
use tabulon_surface::{DrawingSurface, SurfaceError};
use tabulon_types::Point;

/// Draws a table onto a surface, top row first.
///
/// The surface is borrowed for a single call and never retained. A failing
/// primitive aborts the draw immediately; whatever was already emitted stays
/// on the surface.
#[derive(Debug, Clone, Copy)]
pub struct TableDrawer<'t> {
    table: &'t Table,
    engine: LayoutEngine,
}

impl<'t> TableDrawer<'t> {
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            engine: LayoutEngine::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.engine = LayoutEngine::new(config);
        self
    }

    /// Lays the table out against `surface`'s metrics without drawing.
    pub fn layout<S>(&self, surface: &S) -> Result<TableLayout<'t>, SurfaceError>
    where
        S: DrawingSurface + ?Sized,
    {
        self.engine.layout(self.table, surface)
    }

    /// Lays out and draws the table with its top-left corner at `origin`.
    ///
    /// Returns the total drawn height so callers can place content below.
    pub fn draw<S>(&self, surface: &mut S, origin: Point) -> Result<f32, SurfaceError>
    where
        S: DrawingSurface + ?Sized,
    {
        let layout = self.layout(surface)?;
        draw_layout(&layout, surface, origin)
    }
}

/// Draws an already computed layout with its top-left corner at `origin`.
pub fn draw_layout<S>(
    layout: &TableLayout<'_>,
    surface: &mut S,
    origin: Point,
) -> Result<f32, SurfaceError>
where
    S: DrawingSurface + ?Sized,
{
    let down = surface.y_axis().sign();
    log::debug!(
        "Drawing table of {} rows at ({:.2}, {:.2})",
        layout.rows.len(),
        origin.x,
        origin.y
    );

    let mut cursor_y = origin.y;
    for row in &layout.rows {
        let top = cursor_y;
        let bottom = top + down * row.height;

        for cell in &row.cells {
            let left = origin.x + cell.x_offset;
            let bounds = CellBox {
                left,
                right: left + cell.width,
                top,
                bottom,
            };
            paint_background_and_borders(surface, cell, bounds)?;
            paint_text(surface, cell, bounds, down)?;
        }

        cursor_y = bottom;
    }

    Ok(layout.height)
}

fn paint_text<S>(
    surface: &mut S,
    cell: &CellLayout<'_>,
    bounds: CellBox,
    down: f32,
) -> Result<(), SurfaceError>
where
    S: DrawingSurface + ?Sized,
{
    if cell.text().is_empty() {
        return Ok(());
    }
    let origin = Point::new(
        bounds.left + cell.text_offset,
        bounds.bottom - down * cell.baseline_offset,
    );
    surface.show_text(
        origin,
        cell.text(),
        &cell.style.font,
        cell.style.font_size,
        &cell.style.text_color,
    )
}
