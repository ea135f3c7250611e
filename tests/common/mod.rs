#![allow(dead_code)]

pub mod pdf_assertions;

use folio::{
    DocumentSink, NodeId, PdfBackend, RenderBackend, RendererConfig, SinkFactory,
};
use folio_render_core::RecordingSink;
use lopdf::Document as LopdfDocument;
use pdf_assertions::ShownText;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn shown_text(&self) -> Result<Vec<ShownText>, Box<dyn std::error::Error>> {
        pdf_assertions::shown_text(&self.doc)
    }

    pub fn texts(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(self.shown_text()?.into_iter().map(|t| t.text).collect())
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn recording_factory() -> SinkFactory {
    Arc::new(|| Ok(Box::new(RecordingSink::new()) as Box<dyn DocumentSink>))
}

/// Creates an element, attaches it under `parent` and gives it a text child.
pub fn element_with_text(
    renderer: &dyn RenderBackend,
    parent: Option<NodeId>,
    tag: &str,
    text: &str,
) -> NodeId {
    let el = renderer.create_element(tag, None);
    let leaf = renderer.create_text(text);
    renderer.append_child(el, leaf);
    if let Some(parent) = parent {
        renderer.append_child(parent, el);
    }
    el
}

/// `div > [h1 > "Hello", p > "a b c d e f g h i j"]` on a page narrow enough
/// that the paragraph wraps after five words in Helvetica at 14pt.
pub fn heading_and_paragraph(backend: &PdfBackend) -> NodeId {
    let div = backend.create_element("div", None);
    element_with_text(backend, Some(div), "h1", "Hello");
    element_with_text(backend, Some(div), "p", "a b c d e f g h i j");
    div
}

pub fn narrow_page_config() -> RendererConfig {
    RendererConfig::default().with_page_size(folio::PageSize::Custom {
        width: 157.0,
        height: 842.0,
    })
}
