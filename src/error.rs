use tabulon_model::TableError;
use tabulon_render_lopdf::RenderError;
use tabulon_surface::SurfaceError;
use thiserror::Error;

/// Top-level error for building, drawing and writing tables.
#[derive(Error, Debug)]
pub enum TabulonError {
    #[error("Invalid table: {0}")]
    Table(#[from] TableError),

    #[error("Drawing failed: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
