//! Element tree
//!
//! The in-memory document the templating layer builds, one call at a time,
//! before it is laid out. Nodes live in an arena owned by [`ElementTree`] and
//! are addressed by [`NodeId`] handles. A node's parent is stored as a handle
//! too, so ownership only ever flows from a parent's `children` list.

mod node;
mod tree;

pub use node::{ElementData, Node, NodeId, NodeKind};
pub use tree::{Ancestors, ElementTree, TreeError};
