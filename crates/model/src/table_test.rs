#![cfg(test)]

use crate::{Cell, Column, RowBuilder, TableBuilder, TableError};
use tabulon_style::Font;
use tabulon_types::Color;

fn three_columns() -> TableBuilder {
    TableBuilder::new()
        .add_column_of_width(300.0)
        .add_column_of_width(120.0)
        .add_column_of_width(70.0)
        .with_font_size(8.0)
        .with_font(Font::HELVETICA)
}

#[test]
fn test_three_single_span_cells_build() {
    let table = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("This is right aligned without a border"))
                .add(Cell::with_text("And this is another cell"))
                .add(Cell::with_text("Sum").with_background_color(Color::ORANGE))
                .with_background_color(Color::BLUE)
                .build(),
        )
        .build()
        .expect("valid table");

    assert_eq!(table.column_count(), 3);
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.width(), 490.0);
}

#[test]
fn test_spanning_cell_fills_remaining_columns() {
    let table = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("left"))
                .add(Cell::with_text("And this is another cell").with_span(2))
                .build(),
        )
        .build();
    assert!(table.is_ok());
}

#[test]
fn test_short_row_reports_its_index() {
    let result = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a"))
                .add(Cell::with_text("b"))
                .add(Cell::with_text("c"))
                .build(),
        )
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a"))
                .add(Cell::with_text("b"))
                .build(),
        )
        .build();

    assert_eq!(
        result,
        Err(TableError::RowSpanMismatch {
            row: 1,
            span_sum: 2,
            columns: 3
        })
    );
}

#[test]
fn test_overlong_row_is_rejected() {
    let result = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a").with_span(2))
                .add(Cell::with_text("b").with_span(2))
                .build(),
        )
        .build();
    assert!(matches!(
        result,
        Err(TableError::RowSpanMismatch { row: 0, span_sum: 4, .. })
    ));
}

#[test]
fn test_huge_spans_do_not_wrap_around() {
    // usize::MAX + 4 would wrap to 3 and match the column count.
    let result = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a").with_span(usize::MAX))
                .add(Cell::with_text("b").with_span(4))
                .build(),
        )
        .build();
    assert_eq!(
        result,
        Err(TableError::RowSpanMismatch {
            row: 0,
            span_sum: usize::MAX,
            columns: 3
        })
    );
}

#[test]
fn test_no_columns() {
    let result = TableBuilder::new()
        .with_font(Font::HELVETICA)
        .with_font_size(8.0)
        .build();
    assert_eq!(result, Err(TableError::NoColumns));
}

#[test]
fn test_non_positive_column_width_names_column() {
    let result = TableBuilder::new()
        .add_column(Column::new(20.0))
        .add_column(Column::new(0.0))
        .with_font(Font::TIMES_ROMAN)
        .with_font_size(12.0)
        .build();
    assert_eq!(
        result,
        Err(TableError::InvalidColumnWidth {
            index: 1,
            width: 0.0
        })
    );

    let negative = TableBuilder::new()
        .add_column_of_width(-5.0)
        .with_font(Font::TIMES_ROMAN)
        .with_font_size(12.0)
        .build();
    assert!(matches!(negative, Err(TableError::InvalidColumnWidth { index: 0, .. })));
}

#[test]
fn test_missing_font_and_size() {
    let no_font = TableBuilder::new()
        .add_column_of_width(10.0)
        .with_font_size(8.0)
        .build();
    assert_eq!(no_font, Err(TableError::MissingRequiredStyle("font")));

    let no_size = TableBuilder::new()
        .add_column_of_width(10.0)
        .with_font(Font::HELVETICA)
        .build();
    assert_eq!(no_size, Err(TableError::MissingRequiredStyle("font size")));
}

#[test]
fn test_zero_span_is_rejected_before_span_sum() {
    let result = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a").with_span(0))
                .add(Cell::with_text("b").with_span(3))
                .build(),
        )
        .build();
    assert_eq!(result, Err(TableError::ZeroSpan { row: 0, cell: 0 }));
}

#[test]
fn test_negative_border_width() {
    let result = three_columns()
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a"))
                .add(Cell::with_text("b").with_border_width_left(-1.0))
                .add(Cell::with_text("c"))
                .build(),
        )
        .build();
    assert_eq!(
        result,
        Err(TableError::InvalidBorderWidth {
            row: 0,
            cell: 1,
            width: -1.0
        })
    );
}

#[test]
fn test_invalid_font_sizes() {
    let table_level = TableBuilder::new()
        .add_column_of_width(10.0)
        .with_font(Font::HELVETICA)
        .with_font_size(0.0)
        .build();
    assert_eq!(table_level, Err(TableError::InvalidFontSize(0.0)));

    let cell_level = TableBuilder::new()
        .add_column_of_width(10.0)
        .with_font(Font::HELVETICA)
        .with_font_size(8.0)
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("x").with_font_size(-2.0))
                .build(),
        )
        .build();
    assert_eq!(cell_level, Err(TableError::InvalidFontSize(-2.0)));
}

#[test]
fn test_empty_table_is_valid() {
    let table = three_columns().build().expect("rows are optional");
    assert!(table.rows().is_empty());
}

#[test]
fn test_style_chain_resolves_through_table() {
    let table = three_columns()
        .with_border_color(Color::GRAY)
        .add_row(
            RowBuilder::new()
                .add(Cell::with_text("a").with_font(Font::COURIER))
                .add(Cell::with_text("b"))
                .add(Cell::with_text("c"))
                .with_background_color(Color::LIGHT_GRAY)
                .build(),
        )
        .build()
        .unwrap();

    let row = &table.rows()[0];
    let first = table.style_chain(row, &row.cells()[0]).resolve();
    let second = table.style_chain(row, &row.cells()[1]).resolve();

    assert_eq!(first.font, Font::COURIER);
    assert_eq!(second.font, Font::HELVETICA);
    assert_eq!(second.font_size, 8.0);
    assert_eq!(second.border_color, Color::GRAY);
    assert_eq!(second.background_color, Some(Color::LIGHT_GRAY));
    assert_eq!(table.border_color(), Color::GRAY);
}

#[test]
fn test_push_row_from_loop() {
    let mut builder = TableBuilder::new()
        .add_column_of_width(20.0)
        .add_column_of_width(400.0)
        .with_font(Font::TIMES_ROMAN)
        .with_font_size(12.0);
    for i in 0..10 {
        builder.push_row(
            RowBuilder::new()
                .add(Cell::with_text(i))
                .add(Cell::with_text(i * 2))
                .build(),
        );
    }
    let table = builder.build().unwrap();
    assert_eq!(table.rows().len(), 10);
    assert_eq!(table.rows()[9].cells()[1].text(), "18");
}

#[test]
fn test_table_serializes_without_unset_overrides() {
    let table = TableBuilder::new()
        .add_column_of_width(50.0)
        .with_font(Font::HELVETICA)
        .with_font_size(8.0)
        .add_row(RowBuilder::new().add(Cell::with_text("x")).build())
        .build()
        .unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["font"], "Helvetica");
    assert!(json.get("border_color").is_none());
    assert_eq!(json["rows"][0]["cells"][0]["text"], "x");
}
