use serde::Serialize;
use std::fmt::Display;
use tabulon_style::{BorderWidths, Font, HorizontalAlignment, Side, StyleLayer};
use tabulon_types::Color;

/// Border width applied to every side by [`Cell::with_all_borders`].
pub const DEFAULT_BORDER_WIDTH: f32 = 1.0;

/// The smallest styled unit of a table: one line of text occupying one or
/// more consecutive columns of its row.
///
/// A cell carries no column index. Where it lands is decided by its position
/// in the row and the spans of the cells before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    text: String,
    alignment: HorizontalAlignment,
    span: usize,
    border_widths: BorderWidths,
    #[serde(skip_serializing_if = "Option::is_none")]
    border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_size: Option<f32>,
}

impl Cell {
    /// A left-aligned, single-column, borderless cell showing `content`.
    pub fn with_text(content: impl Display) -> Self {
        Self {
            text: content.to_string(),
            alignment: HorizontalAlignment::default(),
            span: 1,
            border_widths: BorderWidths::none(),
            border_color: None,
            background_color: None,
            text_color: None,
            font: None,
            font_size: None,
        }
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Number of columns this cell occupies. Zero is rejected when the table is built.
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    pub fn with_border_width(mut self, side: Side, width: f32) -> Self {
        self.border_widths.set(side, width);
        self
    }

    pub fn with_border_width_top(self, width: f32) -> Self {
        self.with_border_width(Side::Top, width)
    }

    pub fn with_border_width_right(self, width: f32) -> Self {
        self.with_border_width(Side::Right, width)
    }

    pub fn with_border_width_bottom(self, width: f32) -> Self {
        self.with_border_width(Side::Bottom, width)
    }

    pub fn with_border_width_left(self, width: f32) -> Self {
        self.with_border_width(Side::Left, width)
    }

    pub fn with_borders(mut self, width: f32) -> Self {
        self.border_widths = BorderWidths::all(width);
        self
    }

    pub fn with_all_borders(self) -> Self {
        self.with_borders(DEFAULT_BORDER_WIDTH)
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
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

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    pub fn span(&self) -> usize {
        self.span
    }

    pub fn border_widths(&self) -> &BorderWidths {
        &self.border_widths
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    /// This cell's overrides, as the first level of style resolution.
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
