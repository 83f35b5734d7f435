//! PDF output for tabulon.
//!
//! [`PdfPage`] implements [`tabulon_surface::DrawingSurface`] by appending
//! PDF content-stream operators, measuring text with the built-in metrics of
//! the standard Type1 fonts. [`PdfDocument`] collects pages and writes the
//! file.

mod document;
mod encoding;
mod error;
mod metrics;
mod page;

pub use document::PdfDocument;
pub use error::RenderError;
pub use metrics::StandardFont;
pub use page::PdfPage;
