use crate::error::SurfaceError;
use crate::traits::{DrawingSurface, LineMetrics, YAxis};
use serde::Serialize;
use tabulon_style::Font;
use tabulon_types::{Color, Point, Rect};

/// A single primitive emitted to a surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    ShowText {
        origin: Point,
        text: String,
        font: Font,
        size: f32,
        color: Color,
    },
}

/// Font-independent metrics, expressed as fractions of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Advance of every character.
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

/// An in-memory surface that records every primitive in call order.
///
/// Text metrics are deterministic and independent of the font, which makes
/// layout arithmetic easy to predict. The surface can also be told to start
/// failing after a number of primitives, simulating an output that stops
/// accepting writes part-way through a page.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    metrics: FixedMetrics,
    y_axis: YAxis,
    ops: Vec<DrawOp>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: FixedMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Accept `count` primitives, then fail every further one with [`SurfaceError::Closed`].
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeLine { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::ShowText { origin, text, .. } => Some((origin, text.as_str())),
            _ => None,
        })
    }

    fn record(&mut self, op: DrawOp) -> Result<(), SurfaceError> {
        if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
            return Err(SurfaceError::Closed);
        }
        log::trace!("recording {:?}", op);
        self.ops.push(op);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    fn text_width(&self, text: &str, _font: &Font, size: f32) -> Result<f32, SurfaceError> {
        Ok(text.chars().count() as f32 * self.metrics.advance * size)
    }

    fn line_metrics(&self, _font: &Font, size: f32) -> Result<LineMetrics, SurfaceError> {
        Ok(LineMetrics::new(
            self.metrics.ascent * size,
            self.metrics.descent * size,
        ))
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) -> Result<(), SurfaceError> {
        self.record(DrawOp::FillRect {
            rect,
            color: *color,
        })
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &Color,
    ) -> Result<(), SurfaceError> {
        self.record(DrawOp::StrokeLine {
            from,
            to,
            width,
            color: *color,
        })
    }

    fn show_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &Font,
        size: f32,
        color: &Color,
    ) -> Result<(), SurfaceError> {
        self.record(DrawOp::ShowText {
            origin,
            text: text.to_string(),
            font: font.clone(),
            size,
            color: *color,
        })
    }
}
