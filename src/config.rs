use crate::error::ConfigurationError;
use folio_layout::LayoutConfig;
use folio_types::PageSize;
use serde::{Deserialize, Serialize};

const DEFAULT_FONT: &str = "Helvetica";

/// Settings for a PDF backend: the single page it draws on, the standard font
/// it embeds, and the layout constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RendererConfig {
    pub page_size: PageSize,
    pub font: String,
    pub layout: LayoutConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            font: DEFAULT_FONT.to_string(),
            layout: LayoutConfig::default(),
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}
