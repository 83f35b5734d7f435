use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// Offset of the text's left edge from the left edge of its cell box.
    ///
    /// Text wider than the box is not clipped; the offset may then put it
    /// outside the box.
    pub fn offset(self, cell_width: f32, text_width: f32, padding: f32) -> f32 {
        match self {
            HorizontalAlignment::Left => padding,
            HorizontalAlignment::Center => (cell_width - text_width) / 2.0,
            HorizontalAlignment::Right => cell_width - text_width - padding,
        }
    }
}
