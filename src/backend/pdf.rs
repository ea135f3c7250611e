use super::{RenderBackend, UnsupportedOperations};
use crate::config::RendererConfig;
use crate::error::{BackendError, InitializationError};
use crate::registry::RendererType;
use async_trait::async_trait;
use folio_layout::{LayoutEngine, Surface};
use folio_render_core::{DocumentSink, FontId, PageId, RenderError};
use folio_render_lopdf::LopdfSink;
use folio_tree::{ElementData, ElementTree, NodeId};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::OnceCell;

/// Produces the sink a backend draws into. Called at most once per backend.
pub type SinkFactory = Arc<dyn Fn() -> Result<Box<dyn DocumentSink>, RenderError> + Send + Sync>;

/// Lifecycle of a backend's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    Uninitialized,
    Initializing,
    Ready,
    /// Terminal. Every later operation fails with the same error.
    Failed,
}

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const READY: u8 = 2;
const FAILED: u8 = 3;

/// Document-side state, created once during initialization.
struct DocumentState {
    sink: Box<dyn DocumentSink>,
    page: PageId,
    font: FontId,
    page_width: f32,
    engine: LayoutEngine,
}

type SharedDocument = Arc<Mutex<DocumentState>>;

/// A backend that lays out its element tree onto a single PDF page.
///
/// Tree operations are synchronous and never fail; problems are logged.
/// The document itself is created lazily by the first `set_value` or `save`,
/// exactly once, and a failed creation is never retried.
pub struct PdfBackend {
    config: RendererConfig,
    tree: RwLock<ElementTree>,
    sink_factory: SinkFactory,
    document: OnceCell<Result<SharedDocument, InitializationError>>,
    phase: AtomicU8,
    init_attempts: AtomicUsize,
}

impl PdfBackend {
    pub fn new(config: RendererConfig) -> Self {
        let factory: SinkFactory =
            Arc::new(|| Ok(Box::new(LopdfSink::new()) as Box<dyn DocumentSink>));
        Self::with_sink_factory(config, factory)
    }

    pub fn with_sink_factory(config: RendererConfig, sink_factory: SinkFactory) -> Self {
        Self {
            config,
            tree: RwLock::new(ElementTree::new()),
            sink_factory,
            document: OnceCell::new(),
            phase: AtomicU8::new(UNINITIALIZED),
            init_attempts: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn state(&self) -> BackendState {
        match self.phase.load(Ordering::Acquire) {
            INITIALIZING => BackendState::Initializing,
            READY => BackendState::Ready,
            FAILED => BackendState::Failed,
            _ => BackendState::Uninitialized,
        }
    }

    /// How many times document setup has started. Never exceeds one.
    pub fn init_attempts(&self) -> usize {
        self.init_attempts.load(Ordering::Acquire)
    }

    /// A snapshot of an element's attributes, styles and children.
    pub fn element(&self, id: NodeId) -> Option<ElementData> {
        self.read_tree().element(id).ok().cloned()
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.read_tree().parent(id)
    }

    /// The layout cursor, once the document exists.
    pub fn cursor_y(&self) -> Option<f32> {
        let document = self.document.get()?.as_ref().ok()?;
        let state = document.lock().unwrap_or_else(PoisonError::into_inner);
        Some(state.engine.cursor_y())
    }

    fn read_tree(&self) -> RwLockReadGuard<'_, ElementTree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tree(&self) -> RwLockWriteGuard<'_, ElementTree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    async fn document(&self) -> Result<SharedDocument, InitializationError> {
        self.document
            .get_or_init(|| async { self.initialize() })
            .await
            .clone()
    }

    fn initialize(&self) -> Result<SharedDocument, InitializationError> {
        self.init_attempts.fetch_add(1, Ordering::AcqRel);
        self.phase.store(INITIALIZING, Ordering::Release);
        log::debug!("Initializing PDF document");

        match self.create_document() {
            Ok(state) => {
                self.phase.store(READY, Ordering::Release);
                log::info!("PDF document initialized successfully.");
                Ok(Arc::new(Mutex::new(state)))
            }
            Err(e) => {
                let error = InitializationError::from(e);
                self.phase.store(FAILED, Ordering::Release);
                log::error!("Initialization failed: {}", error.message());
                Err(error)
            }
        }
    }

    fn create_document(&self) -> Result<DocumentState, RenderError> {
        let mut sink = (self.sink_factory)()?;
        let page = sink.create_page(&self.config.page_size)?;
        let font = sink.embed_font(&self.config.font)?;
        Ok(DocumentState {
            sink,
            page,
            font,
            page_width: self.config.page_size.width(),
            engine: LayoutEngine::new(self.config.layout.clone()),
        })
    }

    fn layout(
        &self,
        document: &Mutex<DocumentState>,
        node: NodeId,
        value: &str,
    ) -> Result<(), BackendError> {
        let mut guard = document.lock().map_err(|_| BackendError::Lock)?;
        let state = &mut *guard;
        let tree = self.tree.read().map_err(|_| BackendError::Lock)?;
        let mut surface =
            Surface::new(state.sink.as_mut(), state.page, state.font, state.page_width);
        state.engine.set_value(&tree, node, value, &mut surface)?;
        log::debug!("Value set: {}", value);
        Ok(())
    }

    fn serialize(&self, document: &Mutex<DocumentState>) -> Result<Vec<u8>, BackendError> {
        let mut state = document.lock().map_err(|_| BackendError::Lock)?;
        let bytes = state.sink.serialize()?;
        log::info!("Document saved ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

#[async_trait]
impl RenderBackend for PdfBackend {
    fn renderer_type(&self) -> RendererType {
        RendererType::Pdf
    }

    fn create_element(&self, tag: &str, namespace: Option<&str>) -> NodeId {
        self.write_tree().create_element(tag, namespace)
    }

    fn create_text(&self, value: &str) -> NodeId {
        self.write_tree().create_text(value)
    }

    fn append_child(&self, parent: NodeId, child: NodeId) {
        if let Err(e) = self.write_tree().append_child(parent, child) {
            log::warn!("appendChild ignored: {}", e);
        }
    }

    fn set_attribute(&self, el: NodeId, name: &str, value: &str, _namespace: Option<&str>) {
        match self.write_tree().element_mut(el) {
            Ok(element) => element.set_attribute(name, value),
            Err(e) => log::warn!("setAttribute '{}' ignored: {}", name, e),
        }
    }

    fn remove_attribute(&self, el: NodeId, name: &str, _namespace: Option<&str>) {
        match self.write_tree().element_mut(el) {
            Ok(element) => {
                element.remove_attribute(name);
            }
            Err(e) => log::warn!("removeAttribute '{}' ignored: {}", name, e),
        }
    }

    async fn set_value(&self, node: NodeId, value: &str) -> Result<(), BackendError> {
        let document = self.document().await?;
        self.layout(&document, node, value)
    }

    async fn save(&self) -> Result<Vec<u8>, BackendError> {
        let document = self.document().await?;
        self.serialize(&document)
    }
}

impl UnsupportedOperations for PdfBackend {}
