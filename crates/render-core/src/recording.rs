use crate::error::RenderError;
use crate::traits::DocumentSink;
use crate::types::{FontId, PageId, TextRun};
use folio_types::PageSize;
use serde::{Deserialize, Serialize};

/// Average glyph advance as a fraction of the font size.
const DEFAULT_CHAR_WIDTH: f32 = 0.6;

/// A sink that keeps every call in memory instead of producing a real format.
///
/// Text is measured as `chars * size * char_width`; `serialize` emits the
/// recording as JSON.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    recording: Recording,
    char_width: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub pages: Vec<(f32, f32)>,
    pub fonts: Vec<String>,
    pub runs: Vec<RecordedRun>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedRun {
    pub page: usize,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub font: usize,
    pub color: [f32; 3],
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            recording: Recording::default(),
            char_width: DEFAULT_CHAR_WIDTH,
        }
    }
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_char_width(char_width: f32) -> Self {
        Self {
            char_width,
            ..Self::default()
        }
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    pub fn runs(&self) -> &[RecordedRun] {
        &self.recording.runs
    }
}

impl Recording {
    pub fn from_json(bytes: &[u8]) -> Result<Self, RenderError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl DocumentSink for RecordingSink {
    fn create_page(&mut self, size: &PageSize) -> Result<PageId, RenderError> {
        self.recording.pages.push(size.dimensions_pt());
        Ok(PageId(self.recording.pages.len() - 1))
    }

    fn embed_font(&mut self, name: &str) -> Result<FontId, RenderError> {
        if name.trim().is_empty() {
            return Err(RenderError::UnknownFont(name.to_string()));
        }
        self.recording.fonts.push(name.to_string());
        Ok(FontId(self.recording.fonts.len() - 1))
    }

    fn measure_text_width(&self, _font: FontId, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.char_width
    }

    fn draw_text(&mut self, page: PageId, run: TextRun) -> Result<(), RenderError> {
        if page.0 >= self.recording.pages.len() {
            return Err(RenderError::UnknownPage(page));
        }
        if run.font.0 >= self.recording.fonts.len() {
            return Err(RenderError::UnknownFontHandle(run.font));
        }
        self.recording.runs.push(RecordedRun {
            page: page.0,
            color: run.color.to_rgb_f32(),
            text: run.text,
            x: run.x,
            y: run.y,
            size: run.size,
            font: run.font.0,
        });
        Ok(())
    }

    fn serialize(&mut self) -> Result<Vec<u8>, RenderError> {
        Ok(serde_json::to_vec(&self.recording)?)
    }
}
