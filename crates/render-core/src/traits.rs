use crate::error::RenderError;
use crate::types::{FontId, PageId, TextRun};
use folio_types::PageSize;

/// A trait for document sinks, abstracting the page/font/draw/serialize primitives
/// the layout engine needs from an output format.
pub trait DocumentSink: Send {
    fn create_page(&mut self, size: &PageSize) -> Result<PageId, RenderError>;

    fn embed_font(&mut self, name: &str) -> Result<FontId, RenderError>;

    /// Rendered width of `text` in points at `size`.
    fn measure_text_width(&self, font: FontId, text: &str, size: f32) -> f32;

    fn draw_text(&mut self, page: PageId, run: TextRun) -> Result<(), RenderError>;

    /// Encodes everything drawn so far. May be called repeatedly; later calls
    /// include all earlier output.
    fn serialize(&mut self) -> Result<Vec<u8>, RenderError>;
}
