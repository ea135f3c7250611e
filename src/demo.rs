//! The sample document rendered by the `folio` binary.

use crate::backend::{RenderBackend, Renderer};
use folio_tree::NodeId;

pub const TITLE: &str = "Folio PDF Renderer";
pub const DESCRIPTION: &str = "This content is rendered from an element tree into a PDF.";

/// Builds a heading, a description paragraph and a date line under the root
/// element selected for `selector`, and returns that root.
pub fn build_sample(renderer: &dyn Renderer, selector: &str, date: &str) -> NodeId {
    let root = renderer.select_root_element(selector);
    let container = renderer.create_element("div", None);
    renderer.set_attribute(container, "class", "container", None);
    renderer.append_child(root, container);

    let heading = renderer.create_element("h1", None);
    renderer.set_attribute(heading, "style", "color: #0088b3", None);
    append_text(renderer, heading, TITLE);
    renderer.append_child(container, heading);

    let description = renderer.create_element("p", None);
    append_text(renderer, description, DESCRIPTION);
    renderer.append_child(container, description);

    let date_line = renderer.create_element("p", None);
    renderer.set_attribute(date_line, "style", "color: red", None);
    append_text(renderer, date_line, &format!("Generated on {}", date));
    renderer.append_child(container, date_line);

    root
}

fn append_text(renderer: &dyn Renderer, parent: NodeId, value: &str) {
    let text = renderer.create_text(value);
    renderer.append_child(parent, text);
}

/// Today's date in long form, e.g. `Sunday, October 18, 2026`.
pub fn today() -> String {
    chrono::Local::now().format("%A, %B %-d, %Y").to_string()
}
