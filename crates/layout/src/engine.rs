use crate::config::LayoutConfig;
use crate::style::{is_block_tag, TextStyle};
use crate::wrap::wrap_words;
use crate::LayoutError;
use folio_render_core::{DocumentSink, FontId, PageId, TextRun};
use folio_tree::{ElementTree, NodeId, NodeKind};

/// The page the engine draws onto, and the sink that owns it.
pub struct Surface<'a> {
    pub sink: &'a mut dyn DocumentSink,
    pub page: PageId,
    pub font: FontId,
    pub page_width: f32,
}

impl<'a> Surface<'a> {
    pub fn new(sink: &'a mut dyn DocumentSink, page: PageId, font: FontId, page_width: f32) -> Self {
        Self {
            sink,
            page,
            font,
            page_width,
        }
    }
}

/// Places text from an [`ElementTree`] onto a single page.
///
/// The engine owns the vertical cursor. It starts at `start_y` and only ever
/// moves down, across any number of `set_value` calls.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    cursor_y: f32,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        let cursor_y = config.start_y;
        Self { config, cursor_y }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Lays out the subtree rooted at `node`.
    ///
    /// `value` is the text drawn for a text node, and the fallback passed to
    /// children of an element that carry no text of their own.
    pub fn set_value(
        &mut self,
        tree: &ElementTree,
        node: NodeId,
        value: &str,
        surface: &mut Surface<'_>,
    ) -> Result<(), LayoutError> {
        match tree.get(node)?.kind() {
            NodeKind::Element(el) => {
                for &child in &el.children {
                    let own = tree.get(child)?.text().filter(|text| !text.is_empty());
                    self.set_value(tree, child, own.unwrap_or(value), surface)?;
                }
                if is_block_tag(&el.tag) {
                    self.cursor_y -= self.config.block_spacing;
                }
            }
            NodeKind::Text(_) => self.layout_text(tree, node, value, surface)?,
        }
        log::trace!("Value set on {}: {}", node, value);
        Ok(())
    }

    fn layout_text(
        &mut self,
        tree: &ElementTree,
        node: NodeId,
        value: &str,
        surface: &mut Surface<'_>,
    ) -> Result<(), LayoutError> {
        if value.trim().is_empty() {
            log::warn!("Empty value provided for text node {}. Skipping rendering.", node);
            return Ok(());
        }

        let style = TextStyle::resolve(tree, node, &self.config);
        let max_width = surface.page_width - self.config.horizontal_margin;
        let lines = wrap_words(value, max_width, |candidate| {
            surface
                .sink
                .measure_text_width(surface.font, candidate, style.font_size)
        });

        for line in lines {
            surface.sink.draw_text(
                surface.page,
                TextRun {
                    text: line,
                    x: self.config.margin_left,
                    y: self.cursor_y,
                    size: style.font_size,
                    font: surface.font,
                    color: style.color,
                },
            )?;
            self.cursor_y -= self.config.line_height(style.font_size);
        }
        Ok(())
    }
}
