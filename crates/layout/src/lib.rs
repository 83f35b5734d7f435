//! Table layout and drawing.
//!
//! [`LayoutEngine`] turns a validated [`tabulon_model::Table`] into a
//! [`TableLayout`] using only text metrics from a
//! [`tabulon_surface::DrawingSurface`]. [`TableDrawer`] then walks that layout
//! and emits fills, strokes and text to the same kind of surface.

pub mod config;
pub(crate) mod engine;
pub mod output;
pub mod painting;

pub use self::config::LayoutConfig;
pub use self::engine::LayoutEngine;
pub use self::output::{CellLayout, RowLayout, TableLayout};
pub use self::painting::{draw_layout, TableDrawer};

#[cfg(test)]
mod test_utils;
