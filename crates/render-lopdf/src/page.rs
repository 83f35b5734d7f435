use crate::encoding::to_win_ansi;
use crate::metrics::StandardFont;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::BTreeSet;
use tabulon_style::Font;
use tabulon_surface::{DrawingSurface, LineMetrics, SurfaceError, YAxis};
use tabulon_types::{Color, Point, Rect};

const A4: (f32, f32) = (595.0, 842.0);
const LETTER: (f32, f32) = (612.0, 792.0);

/// A single PDF page being drawn.
///
/// Coordinates are PDF user space: the origin is the bottom-left corner of
/// the page and y grows upwards.
#[derive(Debug, Clone)]
pub struct PdfPage {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    fonts: BTreeSet<StandardFont>,
}

impl PdfPage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            operations: Vec::new(),
            fonts: BTreeSet::new(),
        }
    }

    pub fn a4() -> Self {
        Self::new(A4.0, A4.1)
    }

    pub fn a4_landscape() -> Self {
        Self::new(A4.1, A4.0)
    }

    pub fn letter() -> Self {
        Self::new(LETTER.0, LETTER.1)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Fonts referenced by text drawn on this page.
    pub fn fonts(&self) -> impl Iterator<Item = StandardFont> + '_ {
        self.fonts.iter().copied()
    }

    pub(crate) fn encode_content(&self) -> Result<Vec<u8>, lopdf::Error> {
        Content {
            operations: self.operations.clone(),
        }
        .encode()
    }

    fn standard_font(font: &Font) -> Result<StandardFont, SurfaceError> {
        StandardFont::from_font(font).ok_or_else(|| SurfaceError::UnknownFont(font.name().to_string()))
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: &Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.push("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn set_stroke_color(&mut self, color: &Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
    }
}

impl DrawingSurface for PdfPage {
    fn y_axis(&self) -> YAxis {
        YAxis::Up
    }

    fn text_width(&self, text: &str, font: &Font, size: f32) -> Result<f32, SurfaceError> {
        Ok(Self::standard_font(font)?.text_width(text, size))
    }

    fn line_metrics(&self, font: &Font, size: f32) -> Result<LineMetrics, SurfaceError> {
        let font = Self::standard_font(font)?;
        Ok(LineMetrics::new(font.ascent(size), font.descent(size)))
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) -> Result<(), SurfaceError> {
        self.set_fill_color(color);
        self.push(
            "re",
            vec![
                rect.x.into(),
                rect.y.into(),
                rect.width.into(),
                rect.height.into(),
            ],
        );
        self.push("f", vec![]);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &Color,
    ) -> Result<(), SurfaceError> {
        self.push("w", vec![width.into()]);
        self.set_stroke_color(color);
        self.push("m", vec![from.x.into(), from.y.into()]);
        self.push("l", vec![to.x.into(), to.y.into()]);
        self.push("S", vec![]);
        Ok(())
    }

    fn show_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &Font,
        size: f32,
        color: &Color,
    ) -> Result<(), SurfaceError> {
        let font = Self::standard_font(font)?;
        self.fonts.insert(font);

        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![
                Object::Name(font.resource_name().as_bytes().to_vec()),
                size.into(),
            ],
        );
        self.set_fill_color(color);
        self.push("Td", vec![origin.x.into(), origin.y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }
}
