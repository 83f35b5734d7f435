use tabulon_model::{Cell, Row, RowBuilder, Table, TableBuilder};
use tabulon_style::Font;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Columns `[300, 120, 70]` with an 8pt Helvetica default.
pub fn three_column_builder() -> TableBuilder {
    TableBuilder::new()
        .add_column_of_width(300.0)
        .add_column_of_width(120.0)
        .add_column_of_width(70.0)
        .with_font_size(8.0)
        .with_font(Font::HELVETICA)
}

pub fn row_of(cells: Vec<Cell>) -> Row {
    cells
        .into_iter()
        .fold(RowBuilder::new(), RowBuilder::add)
        .build()
}

pub fn single_column_table(width: f32, cell: Cell) -> Table {
    TableBuilder::new()
        .add_column_of_width(width)
        .with_font(Font::HELVETICA)
        .with_font_size(10.0)
        .add_row(row_of(vec![cell]))
        .build()
        .expect("valid single column table")
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

/// Columns `[20, 400]` with a 12pt Times default.
pub fn two_column_builder() -> TableBuilder {
    TableBuilder::new()
        .add_column_of_width(20.0)
        .add_column_of_width(400.0)
        .with_font_size(12.0)
        .with_font(Font::TIMES_ROMAN)
}
