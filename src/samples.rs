//! Ready-made tables used by the command line tool, the tests and the benches.

use crate::error::TabulonError;
use clap::ValueEnum;
use std::fmt;
use tabulon_layout::TableDrawer;
use tabulon_model::{Cell, Column, Row, RowBuilder, Table, TableBuilder, TableError};
use tabulon_render_lopdf::{PdfDocument, PdfPage};
use tabulon_style::{Font, HorizontalAlignment};
use tabulon_surface::{DrawingSurface, SurfaceError};
use tabulon_types::{Color, Point, Size};

const BLUE_DARK: Color = Color::rgb(76, 129, 190);
const BLUE_LIGHT_1: Color = Color::rgb(186, 206, 230);
const BLUE_LIGHT_2: Color = Color::rgb(218, 230, 242);

const FOOTNOTE: &str = "Dieser Kampf muss der WB nicht entsprechen, da als Sparringskampf angesetzt.";
const FOOTNOTE_GAP: f32 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// Header row plus ten bordered rows on alternating backgrounds.
    ColorsAndBorders,
    /// A centered, bordered cell spanning two columns.
    CellSpanning,
    /// Twenty rows on a landscape page with per-row border colors.
    AlternatingRows,
    /// Bold white header over a banded body.
    ExcelLike,
    /// Cells overriding the table font and size.
    DifferentFonts,
    /// A bout sheet with outer and inner borders and a footnote below.
    RingManager,
}

impl Sample {
    pub const ALL: [Sample; 6] = [
        Sample::ColorsAndBorders,
        Sample::CellSpanning,
        Sample::AlternatingRows,
        Sample::ExcelLike,
        Sample::DifferentFonts,
        Sample::RingManager,
    ];

    pub fn table(self) -> Result<Table, TableError> {
        match self {
            Sample::ColorsAndBorders => colors_and_borders(),
            Sample::CellSpanning => cell_spanning(),
            Sample::AlternatingRows => alternating_rows(),
            Sample::ExcelLike => excel_like(),
            Sample::DifferentFonts => different_fonts(),
            Sample::RingManager => ring_manager(),
        }
    }

    /// Page the sample is laid out for.
    pub fn page_size(self) -> Size {
        match self {
            Sample::AlternatingRows => Size::new(842.0, 595.0),
            _ => Size::new(595.0, 842.0),
        }
    }

    /// Left and top margin of the table's top-left corner.
    fn margins(self) -> (f32, f32) {
        match self {
            Sample::AlternatingRows => (30.0, 30.0),
            Sample::RingManager => (56.0, 150.0),
            _ => (50.0, 50.0),
        }
    }

    /// Top-left corner of the table in `surface` coordinates.
    pub fn origin<S: DrawingSurface + ?Sized>(self, surface: &S) -> Point {
        let (left, top) = self.margins();
        let down = surface.y_axis().sign();
        let page_top = if down > 0.0 { 0.0 } else { self.page_size().height };
        Point::new(left, page_top + down * top)
    }

    /// Draws the sample onto `surface` and returns the table height.
    pub fn draw<S>(self, table: &Table, surface: &mut S) -> Result<f32, SurfaceError>
    where
        S: DrawingSurface + ?Sized,
    {
        let origin = self.origin(surface);
        let height = TableDrawer::new(table).draw(surface, origin)?;

        if self == Sample::RingManager {
            let down = surface.y_axis().sign();
            let baseline = Point::new(origin.x, origin.y + down * (height + FOOTNOTE_GAP));
            surface.show_text(baseline, FOOTNOTE, &Font::HELVETICA, 8.0, &Color::BLACK)?;
        }
        Ok(height)
    }

    /// Builds a one-page PDF containing the sample.
    pub fn render(self) -> Result<PdfDocument, TabulonError> {
        let table = self.table()?;
        let size = self.page_size();
        let mut page = PdfPage::new(size.width, size.height);
        let height = self.draw(&table, &mut page)?;
        log::info!("Drew '{self}' ({height:.2}pt tall)");

        let mut document = PdfDocument::new();
        document.add_page(page);
        Ok(document)
    }
}

/// Writes the kebab-case name the command line accepts.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

fn header_row() -> Row {
    RowBuilder::new()
        .add(
            Cell::with_text("This is right aligned without a border")
                .with_alignment(HorizontalAlignment::Right),
        )
        .add(Cell::with_text("And this is another cell"))
        .add(Cell::with_text("Sum").with_background_color(Color::ORANGE))
        .with_background_color(Color::BLUE)
        .build()
}

fn three_columns() -> TableBuilder {
    Table::builder()
        .add_column_of_width(300.0)
        .add_column_of_width(120.0)
        .add_column_of_width(70.0)
        .with_font_size(8.0)
        .with_font(Font::HELVETICA)
}

fn colors_and_borders() -> Result<Table, TableError> {
    let mut builder = three_columns().add_row(header_row());
    for i in 0..10 {
        builder.push_row(
            RowBuilder::new()
                .add(Cell::with_text(i).with_all_borders())
                .add(Cell::with_text(i * i).with_all_borders())
                .add(Cell::with_text(i + i * i).with_all_borders())
                .with_background_color(if i % 2 == 0 { Color::LIGHT_GRAY } else { Color::WHITE })
                .build(),
        );
    }
    builder.build()
}

fn cell_spanning() -> Result<Table, TableError> {
    three_columns()
        .add_row(header_row())
        .add_row(
            RowBuilder::new()
                .add(
                    Cell::with_text("This is right aligned without a border")
                        .with_alignment(HorizontalAlignment::Right),
                )
                .add(
                    Cell::with_text("And this is another cell")
                        .with_span(2)
                        .with_background_color(Color::CYAN)
                        .with_alignment(HorizontalAlignment::Center)
                        .with_all_borders(),
                )
                .with_background_color(Color::BLUE)
                .build(),
        )
        .build()
}

fn alternating_rows() -> Result<Table, TableError> {
    let light_gray = Color::rgb(224, 224, 224);
    let light_blue = Color::rgb(194, 232, 233);

    let mut builder = Table::builder()
        .add_column(Column::new(20.0))
        .add_column(Column::new(400.0))
        .with_font_size(12.0)
        .with_font(Font::TIMES_ROMAN);

    for i in 0..10 {
        builder.push_row(
            RowBuilder::new()
                .add(
                    Cell::with_text(i)
                        .with_border_width_bottom(2.0)
                        .with_alignment(HorizontalAlignment::Right),
                )
                .add(Cell::with_text(i * 2))
                .with_background_color(if i % 2 == 0 { light_blue } else { light_gray })
                .with_border_color(if i == 6 { Color::YELLOW } else { Color::RED })
                .build(),
        );
    }

    for i in 0..10 {
        builder.push_row(
            RowBuilder::new()
                .add(
                    Cell::with_text(i)
                        .with_border_width_right(2.0)
                        .with_alignment(HorizontalAlignment::Right),
                )
                .add(Cell::with_text(i * 2))
                .with_background_color(if i % 2 == 0 { Color::RED } else { Color::WHITE })
                .build(),
        );
    }

    builder.build()
}

fn excel_like() -> Result<Table, TableError> {
    let mut builder = Table::builder()
        .add_column_of_width(240.0)
        .add_column_of_width(70.0)
        .add_column_of_width(70.0)
        .add_column_of_width(70.0)
        .with_font_size(8.0)
        .with_font(Font::HELVETICA)
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("Product").with_all_borders())
                .add(Cell::with_text("2018").with_all_borders())
                .add(Cell::with_text("2019").with_all_borders())
                .add(Cell::with_text("Total").with_all_borders())
                .with_background_color(BLUE_DARK)
                .with_text_color(Color::WHITE)
                .with_font(Font::HELVETICA_BOLD)
                .with_font_size(9.0)
                .build(),
        );

    for i in 0..10 {
        builder.push_row(
            RowBuilder::new()
                .add(Cell::with_text(i).with_all_borders())
                .add(Cell::with_text(i * i).with_all_borders())
                .add(Cell::with_text(i + i * i).with_all_borders())
                .add(Cell::with_text(i + i * i).with_all_borders())
                .with_background_color(if i % 2 == 0 { BLUE_LIGHT_1 } else { BLUE_LIGHT_2 })
                .build(),
        );
    }
    builder.build()
}

fn different_fonts() -> Result<Table, TableError> {
    let mut builder = three_columns().add_row(header_row());
    for i in 0..10 {
        builder.push_row(
            RowBuilder::new()
                .add(Cell::with_text(i).with_all_borders().with_font(Font::COURIER))
                .add(Cell::with_text(i * i).with_all_borders().with_font_size(22.0))
                .add(
                    Cell::with_text(i + i * i)
                        .with_all_borders()
                        .with_font(Font::TIMES_ROMAN),
                )
                .with_background_color(if i % 2 == 0 { Color::LIGHT_GRAY } else { Color::WHITE })
                .build(),
        );
    }
    builder.build()
}

fn ring_manager() -> Result<Table, TableError> {
    let outer = 1.5;
    let inner = 1.0;

    Table::builder()
        .add_column(Column::new(26.0))
        .add_column(Column::new(70.0))
        .add_column(Column::new(390.0))
        .with_font_size(9.0)
        .with_border_color(Color::GRAY)
        .with_font(Font::HELVETICA)
        .add_row(
            RowBuilder::new()
                .add(
                    Cell::with_text("1.")
                        .with_border_width_top(outer)
                        .with_border_width_left(outer)
                        .with_border_width_right(inner),
                )
                .add(
                    Cell::with_text("WK DBV(s)")
                        .with_border_width_top(outer)
                        .with_border_width_right(inner)
                        .with_border_width_left(inner),
                )
                .add(
                    Cell::with_text("Rote Ecke:")
                        .with_border_width_top(outer)
                        .with_border_width_right(outer),
                )
                .build(),
        )
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("").with_border_width_left(outer))
                .add(
                    Cell::with_text("Jugend")
                        .with_border_width_right(inner)
                        .with_border_width_left(inner),
                )
                .add(
                    Cell::with_text(
                        "Thomas Test, m, FC St. Pauli, 01.01.1998, Jugend, 67,5 kg, 12K (8S, 4N, 0U)",
                    )
                    .with_border_width_bottom(inner)
                    .with_border_width_right(outer),
                )
                .build(),
        )
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("").with_border_width_left(outer))
                .add(
                    Cell::with_text("3x3")
                        .with_border_width_right(inner)
                        .with_border_width_left(inner),
                )
                .add(Cell::with_text("Blaue Ecke:").with_border_width_right(outer))
                .build(),
        )
        .add_row(
            RowBuilder::new()
                .add(
                    Cell::with_text("")
                        .with_border_width_left(outer)
                        .with_border_width_bottom(outer),
                )
                .add(
                    Cell::with_text("10 Uz, KS")
                        .with_border_width_right(inner)
                        .with_border_width_left(inner)
                        .with_border_width_bottom(outer),
                )
                .add(
                    Cell::with_text(
                        "Bernd Beispiel, m, Wedeler TSV, 02.01.1999, Jugend, 68,2 kg, 9K (7S, 2N, 0U)",
                    )
                    .with_border_width_bottom(outer)
                    .with_border_width_right(outer),
                )
                .build(),
        )
        .build()
}
