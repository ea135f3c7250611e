use folio_style::{parse_inline_style, StyleMap};
use std::collections::HashMap;
use std::fmt;

/// Handle to a node inside an [`ElementTree`](crate::ElementTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
}

/// A named element with raw attributes, parsed inline styles and ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementData {
    pub tag: String,
    pub namespace: Option<String>,
    pub attributes: HashMap<String, String>,
    pub styles: StyleMap,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(value) => Some(value),
            NodeKind::Element(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }
}

impl ElementData {
    pub fn new(tag: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            tag: tag.into(),
            namespace,
            ..Default::default()
        }
    }

    /// Stores the raw attribute. A `style` attribute is additionally parsed
    /// into [`ElementData::styles`], overwriting repeated properties.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
        if name == "style" {
            parse_inline_style(value, &mut self.styles);
        }
    }

    /// Removes the raw attribute. Removing `style` clears every parsed style.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let removed = self.attributes.remove(name);
        if name == "style" {
            self.styles.clear();
        }
        removed
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}
