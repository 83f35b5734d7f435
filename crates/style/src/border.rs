use serde::{Deserialize, Serialize};

/// One edge of a cell box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// The order in which a cell's borders are stroked.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Per-side border widths. A width of zero means no border on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderWidths {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
}

impl BorderWidths {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all(width: f32) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }

    pub fn get(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, width: f32) {
        match side {
            Side::Top => self.top = width,
            Side::Right => self.right = width,
            Side::Bottom => self.bottom = width,
            Side::Left => self.left = width,
        }
    }

    /// The thicker of the top and bottom borders; this is what a cell
    /// reserves vertically on top of its text and padding.
    pub fn max_horizontal_edge(&self) -> f32 {
        self.top.max(self.bottom)
    }

    pub fn is_none(&self) -> bool {
        Side::ALL.iter().all(|&side| self.get(side) == 0.0)
    }

    /// Sides that actually draw something, in stroke order.
    pub fn visible_sides(&self) -> impl Iterator<Item = (Side, f32)> + '_ {
        Side::ALL
            .into_iter()
            .map(|side| (side, self.get(side)))
            .filter(|&(_, width)| width > 0.0)
    }
}
