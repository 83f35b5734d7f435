//! Cell -> row -> table style fallback.
//!
//! Cells, rows and tables do not share a base type. Each exposes its own
//! overrides as a borrowed layer, and a [`StyleChain`] resolves every
//! attribute through the same three-level lookup.

use crate::font::Font;
use serde::Serialize;
use tabulon_types::Color;

/// The first value present, looking at the cell, then the row, then the table.
pub fn resolve<'a, T: ?Sized>(
    cell: Option<&'a T>,
    row: Option<&'a T>,
    table: Option<&'a T>,
) -> Option<&'a T> {
    cell.or(row).or(table)
}

/// Like [`resolve`], with a terminal default when no level sets the value.
pub fn resolve_or<'a, T: ?Sized>(
    cell: Option<&'a T>,
    row: Option<&'a T>,
    table: Option<&'a T>,
    default: &'a T,
) -> &'a T {
    resolve(cell, row, table).unwrap_or(default)
}

/// Resolution for attributes the table must always define (font, font size).
///
/// The table value is not optional here: a table that lacks it is rejected
/// when it is built, so resolution itself cannot fail.
pub fn resolve_required<'a, T: ?Sized>(
    cell: Option<&'a T>,
    row: Option<&'a T>,
    table: &'a T,
) -> &'a T {
    cell.or(row).unwrap_or(table)
}

/// Optional overrides contributed by a cell or a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleLayer<'a> {
    pub font: Option<&'a Font>,
    pub font_size: Option<&'a f32>,
    pub text_color: Option<&'a Color>,
    pub border_color: Option<&'a Color>,
    pub background_color: Option<&'a Color>,
}

/// Table-level defaults. Font and size are mandatory and end the chain.
#[derive(Debug, Clone, Copy)]
pub struct BaseStyle<'a> {
    pub font: &'a Font,
    pub font_size: &'a f32,
    pub text_color: Option<&'a Color>,
    pub border_color: Option<&'a Color>,
}

/// The three levels that apply to a single cell.
#[derive(Debug, Clone, Copy)]
pub struct StyleChain<'a> {
    pub cell: StyleLayer<'a>,
    pub row: StyleLayer<'a>,
    pub table: BaseStyle<'a>,
}

/// Effective style values for one cell after fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub font: Font,
    pub font_size: f32,
    pub text_color: Color,
    pub border_color: Color,
    pub background_color: Option<Color>,
}

impl<'a> StyleChain<'a> {
    pub fn new(cell: StyleLayer<'a>, row: StyleLayer<'a>, table: BaseStyle<'a>) -> Self {
        Self { cell, row, table }
    }

    pub fn resolve(&self) -> ResolvedStyle {
        let (cell, row, table) = (&self.cell, &self.row, &self.table);
        ResolvedStyle {
            font: resolve_required(cell.font, row.font, table.font).clone(),
            font_size: *resolve_required(cell.font_size, row.font_size, table.font_size),
            text_color: *resolve_or(cell.text_color, row.text_color, table.text_color, &Color::BLACK),
            border_color: *resolve_or(
                cell.border_color,
                row.border_color,
                table.border_color,
                &Color::BLACK,
            ),
            // Backgrounds stop at the row; a table has no background of its own.
            background_color: resolve(cell.background_color, row.background_color, None).copied(),
        }
    }
}
