use crate::cell::Cell;
use serde::Serialize;
use tabulon_style::{Font, StyleLayer};
use tabulon_types::Color;

/// An ordered sequence of cells plus the row-level style fallbacks.
///
/// Cell order is significant: each cell starts at the column where the
/// previous one ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    cells: Vec<Cell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<f32>,
}

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total number of columns covered by this row's cells.
    ///
    /// Saturates at `usize::MAX` instead of wrapping.
    pub fn span_sum(&self) -> usize {
        self.cells.iter().map(Cell::span).fold(0, usize::saturating_add)
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn style_layer(&self) -> StyleLayer<'_> {
        StyleLayer {
            font: self.font.as_ref(),
            font_size: self.font_size.as_ref(),
            text_color: self.text_color.as_ref(),
            border_color: self.border_color.as_ref(),
            background_color: self.background_color.as_ref(),
        }
    }
}

/// Accumulates cells and row-level defaults, then freezes them into a [`Row`].
///
/// Span validation needs the column count, so it happens when the table is
/// built, not here.
#[derive(Debug, Default)]
pub struct RowBuilder {
    cells: Vec<Cell>,
    background_color: Option<Color>,
    text_color: Option<Color>,
    border_color: Option<Color>,
    font: Option<Font>,
    font_size: Option<f32>,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn build(self) -> Row {
        Row {
            cells: self.cells,
            background_color: self.background_color,
            text_color: self.text_color,
            border_color: self.border_color,
            font: self.font,
            font_size: self.font_size,
        }
    }
}
