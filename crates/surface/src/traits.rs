use crate::error::SurfaceError;
use serde::Serialize;
use tabulon_style::Font;
use tabulon_types::{Color, Point, Rect};

/// Vertical extent of a line of text, both values measured away from the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    pub fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Which way "down the page" runs in a surface's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum YAxis {
    /// y grows towards the bottom of the page (screen convention).
    #[default]
    Down,
    /// y grows towards the top of the page (PDF convention).
    Up,
}

impl YAxis {
    /// Multiplier that turns a downward distance into a y delta.
    pub fn sign(self) -> f32 {
        match self {
            YAxis::Down => 1.0,
            YAxis::Up => -1.0,
        }
    }
}

/// A page-like target that can measure and draw text, rectangles and lines.
///
/// The table engine borrows a surface for the duration of a single draw and
/// never keeps it. Every primitive is a separate call; an error from any call
/// aborts the draw.
pub trait DrawingSurface {
    fn y_axis(&self) -> YAxis {
        YAxis::Down
    }

    /// Advance width of `text` rendered on a single line.
    fn text_width(&self, text: &str, font: &Font, size: f32) -> Result<f32, SurfaceError>;

    fn line_metrics(&self, font: &Font, size: f32) -> Result<LineMetrics, SurfaceError>;

    fn fill_rect(&mut self, rect: Rect, color: &Color) -> Result<(), SurfaceError>;

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &Color,
    ) -> Result<(), SurfaceError>;

    /// Draws `text` with its baseline starting at `origin`.
    fn show_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &Font,
        size: f32,
        color: &Color,
    ) -> Result<(), SurfaceError>;
}
