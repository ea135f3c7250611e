use folio_types::Color;
use serde::Serialize;

/// Handle to a page created by a [`DocumentSink`](crate::DocumentSink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageId(pub usize);

/// Handle to a font embedded in a [`DocumentSink`](crate::DocumentSink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FontId(pub usize);

/// One line of text positioned on a page.
///
/// `x`/`y` are in PDF user space: points from the bottom-left corner, with
/// `y` at the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub font: FontId,
    pub color: Color,
}
