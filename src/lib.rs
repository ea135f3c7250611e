//! Folio lays out an element tree, built through a small renderer capability
//! set, onto a PDF page.
//!
//! ```no_run
//! use folio::{RenderBackend, RendererConfig, RendererRegistry};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RendererRegistry::with_pdf(RendererConfig::default());
//! let renderer = registry.create_renderer(None)?;
//!
//! let p = renderer.create_element("p", None);
//! let text = renderer.create_text("Hello");
//! renderer.append_child(p, text);
//! renderer.set_value(p, "").await?;
//! let bytes = renderer.save().await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod demo;
pub mod error;
pub mod preview;
pub mod registry;

pub use backend::{
    BackendState, EventCallback, PdfBackend, RenderBackend, Renderer, SinkFactory, Unsubscribe,
    UnsupportedOperations,
};
pub use config::RendererConfig;
pub use error::{BackendError, ConfigurationError, InitializationError, PreviewError};
pub use registry::{PdfRendererFactory, RendererFactory, RendererRegistry, RendererType};

pub use folio_layout::LayoutConfig;
pub use folio_render_core::{DocumentSink, RenderError};
pub use folio_style::StyleMap;
pub use folio_tree::{ElementData, NodeId};
pub use folio_types::{Color, PageSize};
