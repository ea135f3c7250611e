//! The capability surface a templating layer drives to build a document.
//!
//! [`RenderBackend`] holds the operations that actually shape output.
//! [`UnsupportedOperations`] covers the rest of the surface with defaults that
//! warn and return a neutral value. A type implementing both is a [`Renderer`].

pub mod pdf;

pub use pdf::{BackendState, PdfBackend, SinkFactory};

use crate::error::BackendError;
use crate::registry::RendererType;
use async_trait::async_trait;
use folio_tree::NodeId;

/// Callback passed to [`UnsupportedOperations::listen`].
pub type EventCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Handle returned by [`UnsupportedOperations::listen`]. Unsubscribing does nothing.
#[derive(Debug, Default)]
pub struct Unsubscribe {
    event: String,
}

impl Unsubscribe {
    pub fn unsubscribe(self) {
        log::debug!("Unsubscribe from '{}' ignored", self.event);
    }
}

#[async_trait]
pub trait RenderBackend: Send + Sync {
    fn renderer_type(&self) -> RendererType;

    /// A new, unattached element with no attributes, styles or children.
    fn create_element(&self, tag: &str, namespace: Option<&str>) -> NodeId;

    fn create_text(&self, value: &str) -> NodeId;

    /// Appends `child` to `parent`, recording `parent` as its parent.
    fn append_child(&self, parent: NodeId, child: NodeId);

    /// Stores the raw attribute; `style` is also parsed into the element's styles.
    fn set_attribute(&self, el: NodeId, name: &str, value: &str, namespace: Option<&str>);

    /// Removes the raw attribute; removing `style` clears all parsed styles.
    fn remove_attribute(&self, el: NodeId, name: &str, namespace: Option<&str>);

    /// Returns a fresh element for the host to attach its content to.
    fn select_root_element(&self, selector: &str) -> NodeId {
        log::info!("Root element selected: {}", selector);
        self.create_element("root", None)
    }

    /// Lays out the subtree at `node`, initializing the document first if needed.
    async fn set_value(&self, node: NodeId, value: &str) -> Result<(), BackendError>;

    /// Serializes everything drawn so far.
    async fn save(&self) -> Result<Vec<u8>, BackendError>;
}

fn unsupported(operation: &str) {
    log::warn!("{} is not supported by this renderer", operation);
}

/// Operations the output cannot honor: the document is static and only grows
/// through append and attribute calls.
pub trait UnsupportedOperations {
    fn remove_child(&self, _parent: NodeId, _old_child: NodeId) {
        unsupported("removeChild");
    }

    fn insert_before(&self, _parent: NodeId, _new_child: NodeId, _ref_child: Option<NodeId>) {
        unsupported("insertBefore");
    }

    fn parent_node(&self, _node: NodeId) -> Option<NodeId> {
        unsupported("parentNode");
        None
    }

    fn next_sibling(&self, _node: NodeId) -> Option<NodeId> {
        unsupported("nextSibling");
        None
    }

    fn add_class(&self, _el: NodeId, _name: &str) {
        unsupported("addClass");
    }

    fn remove_class(&self, _el: NodeId, _name: &str) {
        unsupported("removeClass");
    }

    fn set_style(&self, _el: NodeId, _style: &str, _value: &str) {
        unsupported("setStyle");
    }

    fn remove_style(&self, _el: NodeId, _style: &str) {
        unsupported("removeStyle");
    }

    fn set_property(&self, _el: NodeId, _name: &str, _value: &str) {
        unsupported("setProperty");
    }

    fn create_comment(&self, _value: &str) -> Option<NodeId> {
        unsupported("createComment");
        None
    }

    fn destroy_node(&self, _node: NodeId) {
        unsupported("destroyNode");
    }

    fn destroy(&self) {
        unsupported("destroy");
    }

    fn listen(&self, _target: &str, event: &str, _callback: EventCallback) -> Unsubscribe {
        log::warn!("listen is not supported by this renderer: ({})", event);
        Unsubscribe {
            event: event.to_string(),
        }
    }
}

/// The full capability set handed out by the registry.
pub trait Renderer: RenderBackend + UnsupportedOperations {}

impl<T: RenderBackend + UnsupportedOperations> Renderer for T {}
