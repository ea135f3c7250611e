//! Resolves the effective text style for a text node from its ancestors.

use crate::config::LayoutConfig;
use folio_style::parse_color_value;
use folio_tree::{ElementTree, NodeId};
use folio_types::Color;

const BLOCK_TAGS: [&str; 8] = ["h1", "h2", "h3", "h4", "h5", "h6", "p", "div"];

/// Tags after which the cursor receives extra block spacing.
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|block| block.eq_ignore_ascii_case(tag))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn resolve(tree: &ElementTree, node: NodeId, config: &LayoutConfig) -> Self {
        Self {
            font_size: resolve_font_size(tree, node, config),
            color: resolve_color(tree, node),
        }
    }
}

/// Size comes from the nearest element ancestor's tag only.
pub fn resolve_font_size(tree: &ElementTree, node: NodeId, config: &LayoutConfig) -> f32 {
    tree.ancestors(node)
        .find_map(|(_, n)| n.as_element())
        .map(|el| config.font_size_for(&el.tag))
        .unwrap_or(config.default_font_size)
}

/// Color is inherited: the nearest ancestor declaring `color` decides.
/// Unparseable values fall back to black.
pub fn resolve_color(tree: &ElementTree, node: NodeId) -> Color {
    let declared = tree
        .ancestors(node)
        .find_map(|(_, n)| n.as_element().and_then(|el| el.style("color")));

    match declared {
        None => Color::BLACK,
        Some(value) => parse_color_value(value).unwrap_or_else(|err| {
            log::warn!("Failed to parse color: {}. Using black.", err);
            Color::BLACK
        }),
    }
}
