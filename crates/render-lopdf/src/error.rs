use tabulon_surface::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Drawing failed: {0}")]
    Surface(#[from] SurfaceError),
}
