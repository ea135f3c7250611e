use crate::node::{ElementData, Node, NodeId, NodeKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {child} already has parent {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    #[error("Appending {child} under {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },
}

/// Arena holding every node created for one document.
///
/// Nodes are never removed; a detached node simply stays unreachable from the root.
#[derive(Debug, Default, Clone)]
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent: None, kind });
        id
    }

    pub fn create_element(&mut self, tag: &str, namespace: Option<&str>) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(
            tag,
            namespace.map(str::to_string),
        )))
    }

    pub fn create_text(&mut self, value: &str) -> NodeId {
        self.push(NodeKind::Text(value.to_string()))
    }

    pub fn get(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.0).ok_or(TreeError::UnknownNode(id))
    }

    pub fn element(&self, id: NodeId) -> Result<&ElementData, TreeError> {
        self.get(id)?.as_element().ok_or(TreeError::NotAnElement(id))
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, TreeError> {
        match self.nodes.get_mut(id.0) {
            Some(Node { kind: NodeKind::Element(el), .. }) => Ok(el),
            Some(_) => Err(TreeError::NotAnElement(id)),
            None => Err(TreeError::UnknownNode(id)),
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(Node::parent)
    }

    /// Children of an element in append order; empty for text or unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id.0) {
            Some(Node { kind: NodeKind::Element(el), .. }) => &el.children,
            _ => &[],
        }
    }

    /// Walks the parent chain upwards, starting with the direct parent.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Attaches `child` as the last child of `parent` and records the back-reference.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.element(parent)?;
        let child_node = self.get(child)?;
        if let Some(existing) = child_node.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        if parent == child || self.ancestors(parent).any(|(id, _)| id == child) {
            return Err(TreeError::WouldCycle { parent, child });
        }

        self.element_mut(parent)?.children.push(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }
}

pub struct Ancestors<'a> {
    tree: &'a ElementTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.nodes.get(id.0)?;
        self.next = node.parent;
        Some((id, node))
    }
}
