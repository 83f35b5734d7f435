pub mod box_painter;
pub mod table_drawer;

pub use table_drawer::{draw_layout, TableDrawer};
