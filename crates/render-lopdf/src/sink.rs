use crate::metrics::StandardFont;
use folio_render_core::{DocumentSink, FontId, PageId, RenderError, TextRun};
use folio_types::{Color, PageSize};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

const PDF_VERSION: &str = "1.7";

/// An in-memory PDF sink built on `lopdf`.
///
/// Only the standard Type1 fonts are supported, referenced by name with
/// `WinAnsiEncoding`.
#[derive(Debug, Default)]
pub struct LopdfSink {
    pages: Vec<PageBuffer>,
    fonts: Vec<EmbeddedFont>,
}

#[derive(Debug)]
struct EmbeddedFont {
    font: StandardFont,
    resource_name: String,
}

#[derive(Debug)]
struct PageBuffer {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    state: PageRenderState,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
}

impl LopdfSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn font(&self, id: FontId) -> Result<&EmbeddedFont, RenderError> {
        self.fonts.get(id.0).ok_or(RenderError::UnknownFontHandle(id))
    }

    /// Assembles the object graph for every page buffered so far.
    fn build_document(&self) -> Result<Document, RenderError> {
        let mut document = Document::with_version(PDF_VERSION);
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in &self.fonts {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name.as_bytes(), Object::Reference(font_id));
        }
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content = Content {
                operations: page.operations.clone(),
            };
            let content_id = document.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page.width.into(), page.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.pages.len() as i64,
        };
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);
        Ok(document)
    }
}

impl PageBuffer {
    fn set_font(&mut self, resource_name: &str, size: f32) {
        if self.state.font_name != resource_name || self.state.font_size != size {
            self.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(resource_name.as_bytes().to_vec()), size.into()],
            ));
            self.state.font_name = resource_name.to_string();
            self.state.font_size = size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_rgb_f32();
            self.operations
                .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            self.state.fill_color = Some(color);
        }
    }
}

impl DocumentSink for LopdfSink {
    fn create_page(&mut self, size: &PageSize) -> Result<PageId, RenderError> {
        let (width, height) = size.dimensions_pt();
        self.pages.push(PageBuffer {
            width,
            height,
            operations: Vec::new(),
            state: PageRenderState::default(),
        });
        log::debug!("Created page {} ({}x{}pt)", self.pages.len(), width, height);
        Ok(PageId(self.pages.len() - 1))
    }

    fn embed_font(&mut self, name: &str) -> Result<FontId, RenderError> {
        let font: StandardFont = name.parse()?;
        if let Some(index) = self.fonts.iter().position(|f| f.font == font) {
            return Ok(FontId(index));
        }
        let resource_name = format!("F{}", self.fonts.len() + 1);
        log::debug!("Registered font {} as /{}", font.postscript_name(), resource_name);
        self.fonts.push(EmbeddedFont { font, resource_name });
        Ok(FontId(self.fonts.len() - 1))
    }

    fn measure_text_width(&self, font: FontId, text: &str, size: f32) -> f32 {
        let font = self
            .fonts
            .get(font.0)
            .map(|f| f.font)
            .unwrap_or(StandardFont::Helvetica);
        font.text_width(text, size)
    }

    fn draw_text(&mut self, page: PageId, run: TextRun) -> Result<(), RenderError> {
        let resource_name = self.font(run.font)?.resource_name.clone();
        let buffer = self
            .pages
            .get_mut(page.0)
            .ok_or(RenderError::UnknownPage(page))?;

        if run.text.trim().is_empty() {
            return Ok(());
        }
        buffer.operations.push(Operation::new("BT", vec![]));
        buffer.set_font(&resource_name, run.size);
        buffer.set_fill_color(run.color);
        buffer
            .operations
            .push(Operation::new("Td", vec![run.x.into(), run.y.into()]));
        buffer.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
        ));
        buffer.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn serialize(&mut self) -> Result<Vec<u8>, RenderError> {
        let mut document = self.build_document()?;
        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        log::debug!("Serialized {} page(s), {} bytes", self.pages.len(), buffer.len());
        Ok(buffer)
    }
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
