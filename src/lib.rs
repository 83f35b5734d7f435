//! Tables for PDF pages.
//!
//! Build a [`Table`] from columns and rows of [`Cell`]s, then hand it to a
//! [`TableDrawer`] together with any [`DrawingSurface`]. [`PdfPage`] is the
//! surface that writes PDF content; [`RecordingSurface`] captures the
//! primitives for inspection.
//!
//! ```no_run
//! use tabulon::{Cell, Color, Font, PdfDocument, PdfPage, Point, RowBuilder, Table, TableDrawer};
//!
//! # fn main() -> Result<(), tabulon::TabulonError> {
//! let table = Table::builder()
//!     .add_column_of_width(120.0)
//!     .add_column_of_width(60.0)
//!     .with_font(Font::HELVETICA)
//!     .with_font_size(8.0)
//!     .add_row(
//!         RowBuilder::new()
//!             .add(Cell::with_text("Total").with_all_borders())
//!             .add(Cell::with_text(42).with_background_color(Color::ORANGE))
//!             .build(),
//!     )
//!     .build()?;
//!
//! let mut page = PdfPage::a4();
//! TableDrawer::new(&table).draw(&mut page, Point::new(50.0, 792.0))?;
//!
//! let mut document = PdfDocument::new();
//! document.add_page(page);
//! document.save("table.pdf")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod samples;

pub use error::TabulonError;
pub use samples::Sample;

pub use tabulon_layout::{
    draw_layout, CellLayout, LayoutConfig, LayoutEngine, RowLayout, TableDrawer, TableLayout,
};
pub use tabulon_model::{Cell, Column, Row, RowBuilder, Table, TableBuilder, TableError};
pub use tabulon_render_lopdf::{PdfDocument, PdfPage, RenderError, StandardFont};
pub use tabulon_style::{BorderWidths, Font, HorizontalAlignment, Side};
pub use tabulon_surface::{
    DrawOp, DrawingSurface, FixedMetrics, LineMetrics, RecordingSurface, SurfaceError, YAxis,
};
pub use tabulon_types::{Color, Point, Rect, Size};
