use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown font: '{0}'")]
    UnknownFont(String),
    #[error("Surface is closed and cannot accept further drawing")]
    Closed,
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Other surface error: {0}")]
    Other(String),
}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError::Other(s.to_string())
    }
}
