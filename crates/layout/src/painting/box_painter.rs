use crate::output::CellLayout;
use tabulon_style::Side;
use tabulon_surface::{DrawingSurface, SurfaceError};
use tabulon_types::{Point, Rect};

/// Corners of a cell box in surface coordinates.
///
/// `top`/`bottom` are the edges as seen on the page; which one has the
/// larger y depends on the surface's axis.
#[derive(Debug, Clone, Copy)]
pub struct CellBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CellBox {
    pub fn rect(&self) -> Rect {
        Rect::from_corners(
            Point::new(self.left, self.top),
            Point::new(self.right, self.bottom),
        )
    }

    /// Endpoints of the line running along `side`.
    pub fn edge(&self, side: Side) -> (Point, Point) {
        let (l, r, t, b) = (self.left, self.right, self.top, self.bottom);
        match side {
            Side::Top => (Point::new(l, t), Point::new(r, t)),
            Side::Right => (Point::new(r, t), Point::new(r, b)),
            Side::Bottom => (Point::new(l, b), Point::new(r, b)),
            Side::Left => (Point::new(l, t), Point::new(l, b)),
        }
    }
}

/// Emits the background and border primitives for one cell.
///
/// Nothing is emitted for an unset background or a zero-width side.
pub fn paint_background_and_borders<S>(
    surface: &mut S,
    cell: &CellLayout<'_>,
    bounds: CellBox,
) -> Result<(), SurfaceError>
where
    S: DrawingSurface + ?Sized,
{
    if let Some(background) = &cell.style.background_color {
        surface.fill_rect(bounds.rect(), background)?;
    }

    for (side, width) in cell.cell.border_widths().visible_sides() {
        let (from, to) = bounds.edge(side);
        surface.stroke_line(from, to, width, &cell.style.border_color)?;
    }

    Ok(())
}
