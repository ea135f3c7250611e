//! Core rendering abstractions for document output.
//!
//! This crate provides the seam between layout and a concrete output format:
//! - `DocumentSink` trait for page, font, measurement, drawing and serialization primitives
//! - Error types for rendering operations
//! - `RecordingSink`, an in-memory sink that records draw calls

mod error;
mod recording;
mod traits;
mod types;

pub use error::RenderError;
pub use recording::{RecordedRun, Recording, RecordingSink};
pub use traits::DocumentSink;
pub use types::{FontId, PageId, TextRun};
