/// Spacing applied inside every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Space between a cell's left/right edge and its text, for left- and
    /// right-aligned text. Centered text ignores it.
    ///
    /// Defaults to `2.0`.
    pub horizontal_padding: f32,
    /// Space above and below the text line, applied on both sides.
    ///
    /// Defaults to `2.0`.
    pub vertical_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_padding: 2.0,
            vertical_padding: 2.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_horizontal_padding(mut self, padding: f32) -> Self {
        self.horizontal_padding = padding;
        self
    }

    pub fn with_vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding;
        self
    }
}
