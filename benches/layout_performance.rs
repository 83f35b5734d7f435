//! Layout and drawing micro-benchmarks
//!
//! Measures table layout, drawing onto an in-memory surface and full PDF
//! serialization for growing row counts.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tabulon::{
    Cell, Color, Font, LayoutEngine, PdfDocument, PdfPage, Point, RecordingSurface, RowBuilder,
    Table, TableDrawer,
};

fn banded_table(row_count: usize) -> Table {
    let mut builder = Table::builder()
        .add_column_of_width(240.0)
        .add_column_of_width(70.0)
        .add_column_of_width(70.0)
        .add_column_of_width(70.0)
        .with_font(Font::HELVETICA)
        .with_font_size(8.0);

    for i in 0..row_count {
        builder.push_row(
            RowBuilder::new()
                .add(Cell::with_text(format!("Product {i}")).with_all_borders())
                .add(Cell::with_text(i * i).with_all_borders())
                .add(Cell::with_text(i + i * i).with_span(2).with_all_borders())
                .with_background_color(if i % 2 == 0 { Color::LIGHT_GRAY } else { Color::WHITE })
                .build(),
        );
    }
    builder.build().expect("Failed to build table")
}

fn benchmark_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_table");
    let engine = LayoutEngine::default();
    let surface = RecordingSurface::new();

    for row_count in [10, 100, 1000] {
        let table = banded_table(row_count);
        group.bench_with_input(BenchmarkId::new("rows", row_count), &table, |b, table| {
            b.iter(|| {
                engine
                    .layout(black_box(table), &surface)
                    .expect("Failed to lay out table")
            });
        });
    }

    group.finish();
}

fn benchmark_draw_recording(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_recording");

    for row_count in [10, 100, 1000] {
        let table = banded_table(row_count);
        group.bench_with_input(BenchmarkId::new("rows", row_count), &table, |b, table| {
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                TableDrawer::new(black_box(table))
                    .draw(&mut surface, Point::new(50.0, 50.0))
                    .expect("Failed to draw table");
                surface.take_ops()
            });
        });
    }

    group.finish();
}

fn benchmark_pdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_page");

    for row_count in [10, 50] {
        let table = banded_table(row_count);
        group.bench_with_input(BenchmarkId::new("rows", row_count), &table, |b, table| {
            b.iter(|| {
                let mut page = PdfPage::a4();
                TableDrawer::new(table)
                    .draw(&mut page, Point::new(50.0, 792.0))
                    .expect("Failed to draw table");
                let mut document = PdfDocument::new();
                document.add_page(page);
                let mut bytes = Vec::new();
                document.save_to(&mut bytes).expect("Failed to write PDF");
                bytes
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_layout,
    benchmark_draw_recording,
    benchmark_pdf
);
criterion_main!(benches);
