//! Drawing surface abstraction.
//!
//! This crate provides the capability the table engine draws against:
//! - `DrawingSurface` trait for text measurement and primitive drawing
//! - Error type for surface operations
//! - `RecordingSurface`, an in-memory surface that records every primitive

mod error;
mod recording;
mod traits;

pub use error::SurfaceError;
pub use recording::{DrawOp, FixedMetrics, RecordingSurface};
pub use traits::{DrawingSurface, LineMetrics, YAxis};
